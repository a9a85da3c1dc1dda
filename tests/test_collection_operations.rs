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

mod common;

use std::time::{Duration, Instant};

use prost::Message;
use serde_json::json;

use common::stub_client;
use milvus_client::codec::key_value::find_key_value;
use milvus_client::proto::common::{ConsistencyLevel, KeyValuePair, Status};
use milvus_client::proto::milvus::{
    CreateCollectionRequest, CreateCredentialRequest, CreateIndexRequest, GetCollectionStatisticsResponse,
    IndexRequest, OperateUserRoleRequest, OperateUserRoleType, PartitionRequest, ShowPartitionsRequest,
    ShowPartitionsResponse, ShowType,
};
use milvus_client::proto::schema::{CollectionSchema, DataType};
use milvus_client::{
    CollectionNameReq, CreateCollectionReq, CreateIndexReq, CreateUserReq, FieldSpec, IndexReq, LoadPartitionsReq,
    Method, MilvusError, PartitionReq, ShowPartitionsReq, TransportError, UserRoleReq, ValidationError,
};

fn books() -> CreateCollectionReq {
    CreateCollectionReq {
        collection_name: "books".to_string(),
        description: "library".to_string(),
        fields: vec![
            FieldSpec::new("book_id", DataType::Int64).primary_key(),
            FieldSpec::new("word_count", DataType::Int64),
            FieldSpec::new("intro", DataType::FloatVector).dim(4),
        ],
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_collection_encodes_schema() {
    let (stub, client) = stub_client();
    stub.respond(Method::CreateCollection, &Status::success());

    let status = client.create_collection(&books()).await.unwrap();
    assert!(status.is_success());

    let sent: CreateCollectionRequest = stub.last_request(Method::CreateCollection).unwrap();
    assert_eq!(sent.collection_name, "books");
    assert_eq!(sent.consistency_level, ConsistencyLevel::Bounded as i32);

    let schema = CollectionSchema::decode(sent.schema.as_slice()).unwrap();
    assert_eq!(schema.name, "books");
    assert_eq!(schema.description, "library");
    let names: Vec<&str> = schema.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["book_id", "word_count", "intro"]);
    assert_eq!(schema.fields[2].type_params, vec![KeyValuePair::new("dim", "4")]);
}

#[tokio::test]
async fn test_invalid_collection_is_rejected_locally() {
    let (stub, client) = stub_client();

    let mut two_keys = books();
    two_keys.fields[1].is_primary_key = true;
    assert_eq!(
        client.create_collection(&two_keys).await.unwrap_err(),
        MilvusError::Validation(ValidationError::PrimaryKeyCount(2))
    );

    let mut no_dim = books();
    no_dim.fields[2] = FieldSpec::new("intro", DataType::FloatVector);
    assert_eq!(
        client.create_collection(&no_dim).await.unwrap_err(),
        MilvusError::Validation(ValidationError::MissingDim)
    );

    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn test_statistics_expose_row_count() {
    let (stub, client) = stub_client();
    stub.respond(
        Method::GetCollectionStatistics,
        &GetCollectionStatisticsResponse {
            status: Some(Status::success()),
            stats: vec![KeyValuePair::new("row_count", "1000")],
        },
    );

    let stats = client
        .get_collection_statistics(&CollectionNameReq::new("books"))
        .await
        .unwrap();
    assert_eq!(stats.row_count(), Some(1000));
    assert_eq!(stats.data.get("row_count"), Some(&json!(1000)));
    assert_eq!(stats.stats.len(), 1);
}

#[tokio::test]
async fn test_transport_error_is_returned_unchanged() {
    let (stub, client) = stub_client();
    let failure = TransportError::DeadlineExceeded {
        method: "HasCollection".to_string(),
    };
    stub.fail(Method::HasCollection, failure.clone());

    let err = client.has_collection(&CollectionNameReq::new("books")).await.unwrap_err();
    assert_eq!(err, MilvusError::Transport(failure));
}

#[tokio::test]
async fn test_calls_carry_a_deadline() {
    let (stub, client) = stub_client();
    stub.respond(Method::DropCollection, &Status::success());

    let before = Instant::now();
    let req = CollectionNameReq {
        collection_name: "books".to_string(),
        timeout: Some(Duration::from_secs(3)),
    };
    client.drop_collection(&req).await.unwrap();

    let deadline = stub.calls_to(Method::DropCollection)[0].deadline.unwrap();
    assert!(deadline >= before + Duration::from_secs(3));
    assert!(deadline <= Instant::now() + Duration::from_secs(3));
}

#[tokio::test]
async fn test_partition_requests() {
    let (stub, client) = stub_client();
    stub.respond(Method::CreatePartition, &Status::success())
        .respond(
            Method::ShowPartitions,
            &ShowPartitionsResponse {
                status: Some(Status::success()),
                ..Default::default()
            },
        );

    client
        .create_partition(&PartitionReq::new("books", "2024"))
        .await
        .unwrap();
    let sent: PartitionRequest = stub.last_request(Method::CreatePartition).unwrap();
    assert_eq!(sent.partition_name, "2024");

    client
        .show_partitions(&ShowPartitionsReq {
            collection_name: "books".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    let shown: ShowPartitionsRequest = stub.last_request(Method::ShowPartitions).unwrap();
    assert_eq!(shown.r#type, ShowType::All as i32);

    assert_eq!(
        client
            .create_partition(&PartitionReq::new("books", ""))
            .await
            .unwrap_err(),
        MilvusError::Validation(ValidationError::MissingCollectionOrPartition)
    );
    assert_eq!(
        client
            .load_partitions(&LoadPartitionsReq {
                collection_name: "books".to_string(),
                ..Default::default()
            })
            .await
            .unwrap_err(),
        MilvusError::Validation(ValidationError::MissingPartitionNames)
    );
}

#[tokio::test]
async fn test_index_parameters_travel_as_pairs() {
    let (stub, client) = stub_client();
    stub.respond(Method::CreateIndex, &Status::success())
        .respond(Method::DropIndex, &Status::success());

    let extra_params = json!({"index_type": "IVF_FLAT", "metric_type": "L2", "params": "{\"nlist\":1024}"});
    client
        .create_index(&CreateIndexReq {
            collection_name: "books".to_string(),
            field_name: "intro".to_string(),
            extra_params: extra_params.as_object().cloned().unwrap_or_default(),
            ..Default::default()
        })
        .await
        .unwrap();
    let sent: CreateIndexRequest = stub.last_request(Method::CreateIndex).unwrap();
    assert_eq!(find_key_value(&sent.extra_params, "index_type"), Some("IVF_FLAT"));
    assert_eq!(find_key_value(&sent.extra_params, "params"), Some("{\"nlist\":1024}"));

    let by_name = IndexReq {
        collection_name: "books".to_string(),
        index_name: Some("intro_idx".to_string()),
        ..Default::default()
    };
    client.drop_index(&by_name).await.unwrap();
    let dropped: IndexRequest = stub.last_request(Method::DropIndex).unwrap();
    assert_eq!(dropped.index_name, "intro_idx");
    assert_eq!(dropped.field_name, "");

    let unnamed = IndexReq {
        collection_name: "books".to_string(),
        ..Default::default()
    };
    assert_eq!(
        client.drop_index(&unnamed).await.unwrap_err(),
        MilvusError::Validation(ValidationError::MissingFieldName)
    );
    assert_eq!(stub.call_count(Method::DropIndex), 1);
}

#[tokio::test]
async fn test_user_management_encodes_passwords() {
    let (stub, client) = stub_client();
    stub.respond(Method::CreateCredential, &Status::success())
        .respond(Method::OperateUserRole, &Status::success());

    client
        .create_user(&CreateUserReq {
            username: "alice".to_string(),
            password: "Milvus".to_string(),
            timeout: None,
        })
        .await
        .unwrap();
    let sent: CreateCredentialRequest = stub.last_request(Method::CreateCredential).unwrap();
    assert_eq!(sent.username, "alice");
    assert_eq!(sent.password, "TWlsdnVz");

    client
        .remove_user_from_role(&UserRoleReq {
            username: "alice".to_string(),
            role_name: "reader".to_string(),
            timeout: None,
        })
        .await
        .unwrap();
    let op: OperateUserRoleRequest = stub.last_request(Method::OperateUserRole).unwrap();
    assert_eq!(op.r#type, OperateUserRoleType::RemoveUserFromRole as i32);

    assert_eq!(
        client
            .create_user(&CreateUserReq {
                username: "bob".to_string(),
                ..Default::default()
            })
            .await
            .unwrap_err(),
        MilvusError::Validation(ValidationError::MissingCredentials)
    );
}
