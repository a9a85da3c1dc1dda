/*
 * Copyright 2025 Vijaykumar Singh
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! User Service
//!
//! Credentials and role membership. Passwords are sent base64-encoded, which
//! is what the server's credential endpoints expect.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::info;

use super::{require, ServiceContext};
use crate::core::errors::{Result, ValidationError};
use crate::core::requests::{
    BareReq, CreateUserReq, DeleteUserReq, RoleReq, SelectRoleReq, UpdateUserReq, UserRoleReq,
};
use crate::network::Method;
use crate::proto::common::Status;
use crate::proto::milvus::{
    CreateCredentialRequest, CreateRoleRequest, DeleteCredentialRequest, DropRoleRequest, ListCredUsersRequest,
    ListCredUsersResponse, OperateUserRoleRequest, OperateUserRoleType, RoleEntity, SelectRoleRequest,
    SelectRoleResponse, UpdateCredentialRequest,
};

fn encode_password(password: &str) -> String {
    STANDARD.encode(password)
}

#[derive(Clone)]
pub struct UserService {
    ctx: ServiceContext,
}

impl UserService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub async fn create_user(&self, req: &CreateUserReq) -> Result<Status> {
        if req.username.is_empty() || req.password.is_empty() {
            return Err(ValidationError::MissingCredentials.into());
        }
        info!("👤 Creating user: {}", req.username);
        let request = CreateCredentialRequest {
            username: req.username.clone(),
            password: encode_password(&req.password),
        };
        self.ctx.call_status(Method::CreateCredential, &request, req.timeout).await
    }

    pub async fn update_user(&self, req: &UpdateUserReq) -> Result<Status> {
        if req.username.is_empty() || req.old_password.is_empty() || req.new_password.is_empty() {
            return Err(ValidationError::MissingCredentials.into());
        }
        let request = UpdateCredentialRequest {
            username: req.username.clone(),
            old_password: encode_password(&req.old_password),
            new_password: encode_password(&req.new_password),
        };
        self.ctx.call_status(Method::UpdateCredential, &request, req.timeout).await
    }

    pub async fn delete_user(&self, req: &DeleteUserReq) -> Result<Status> {
        require(&req.username, ValidationError::MissingUsername)?;
        info!("🗑️ Deleting user: {}", req.username);
        let request = DeleteCredentialRequest {
            username: req.username.clone(),
        };
        self.ctx.call_status(Method::DeleteCredential, &request, req.timeout).await
    }

    pub async fn list_users(&self, req: &BareReq) -> Result<ListCredUsersResponse> {
        self.ctx.call(Method::ListCredUsers, &ListCredUsersRequest {}, req.timeout).await
    }

    pub async fn create_role(&self, req: &RoleReq) -> Result<Status> {
        require(&req.role_name, ValidationError::MissingRoleName)?;
        let request = CreateRoleRequest {
            entity: Some(RoleEntity {
                name: req.role_name.clone(),
            }),
        };
        self.ctx.call_status(Method::CreateRole, &request, req.timeout).await
    }

    pub async fn drop_role(&self, req: &RoleReq) -> Result<Status> {
        require(&req.role_name, ValidationError::MissingRoleName)?;
        let request = DropRoleRequest {
            role_name: req.role_name.clone(),
            force_drop: false,
        };
        self.ctx.call_status(Method::DropRole, &request, req.timeout).await
    }

    async fn operate_user_role(&self, req: &UserRoleReq, operation: OperateUserRoleType) -> Result<Status> {
        require(&req.username, ValidationError::MissingUsername)?;
        require(&req.role_name, ValidationError::MissingRoleName)?;
        let request = OperateUserRoleRequest {
            username: req.username.clone(),
            role_name: req.role_name.clone(),
            r#type: operation as i32,
        };
        self.ctx.call_status(Method::OperateUserRole, &request, req.timeout).await
    }

    pub async fn add_user_to_role(&self, req: &UserRoleReq) -> Result<Status> {
        self.operate_user_role(req, OperateUserRoleType::AddUserToRole).await
    }

    pub async fn remove_user_from_role(&self, req: &UserRoleReq) -> Result<Status> {
        self.operate_user_role(req, OperateUserRoleType::RemoveUserFromRole).await
    }

    pub async fn select_role(&self, req: &SelectRoleReq) -> Result<SelectRoleResponse> {
        require(&req.role_name, ValidationError::MissingRoleName)?;
        let request = SelectRoleRequest {
            role: Some(RoleEntity {
                name: req.role_name.clone(),
            }),
            include_user_info: req.include_user_info,
        };
        self.ctx.call(Method::SelectRole, &request, req.timeout).await
    }

    /// Every role, with its users
    pub async fn list_roles(&self, req: &BareReq) -> Result<SelectRoleResponse> {
        let request = SelectRoleRequest {
            role: None,
            include_user_info: true,
        };
        self.ctx.call(Method::SelectRole, &request, req.timeout).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_is_base64() {
        assert_eq!(encode_password("Milvus"), "TWlsdnVz");
    }
}
