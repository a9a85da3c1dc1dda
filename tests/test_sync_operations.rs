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

use std::collections::HashMap;

use common::{stub_client, stub_client_with};
use milvus_client::proto::common::{ErrorCode, Status};
use milvus_client::proto::milvus::{FlushResponse, GetFlushStateRequest, GetFlushStateResponse, GetLoadingProgressResponse};
use milvus_client::proto::schema::LongArray;
use milvus_client::{
    CancellationToken, ClientConfig, FlushReq, LoadCollectionReq, Method, MilvusError, ValidationError,
};

fn flushed(flushed: bool) -> GetFlushStateResponse {
    GetFlushStateResponse {
        status: Some(Status::success()),
        flushed,
    }
}

fn progress(progress: i64) -> GetLoadingProgressResponse {
    GetLoadingProgressResponse {
        status: Some(Status::success()),
        progress,
        ..Default::default()
    }
}

fn flush_books() -> FlushResponse {
    FlushResponse {
        status: Some(Status::success()),
        coll_seg_ids: HashMap::from([("books".to_string(), LongArray { data: vec![9, 3] })]),
        coll_flush_ts: HashMap::from([("books".to_string(), 4242u64)]),
        ..Default::default()
    }
}

fn flush_req(names: &[&str]) -> FlushReq {
    FlushReq {
        collection_names: names.iter().map(|n| n.to_string()).collect(),
        timeout: None,
    }
}

#[tokio::test]
async fn test_flush_sync_polls_until_flushed() {
    let (stub, client) = stub_client();
    stub.respond(Method::Flush, &flush_books())
        .respond(Method::GetFlushState, &flushed(false))
        .respond(Method::GetFlushState, &flushed(false))
        .respond(Method::GetFlushState, &flushed(true));

    let response = client.flush_sync(&flush_req(&["books"]), None).await.unwrap();
    assert_eq!(response.coll_seg_ids["books"].data, vec![9, 3]);
    assert_eq!(stub.call_count(Method::Flush), 1);
    assert_eq!(stub.call_count(Method::GetFlushState), 3);

    let state: GetFlushStateRequest = stub.last_request(Method::GetFlushState).unwrap();
    assert_eq!(state.segment_ids, vec![3, 9]);
    assert_eq!(state.collection_name, "books");
    assert_eq!(state.flush_ts, 4242);
}

#[tokio::test]
async fn test_flush_sync_of_several_collections_omits_flush_ts() {
    let (stub, client) = stub_client();
    stub.respond(Method::Flush, &flush_books())
        .respond(Method::GetFlushState, &flushed(true));

    client.flush_sync(&flush_req(&["books", "bits"]), None).await.unwrap();
    let state: GetFlushStateRequest = stub.last_request(Method::GetFlushState).unwrap();
    assert_eq!(state.collection_name, "");
    assert_eq!(state.flush_ts, 0);
}

#[tokio::test]
async fn test_flush_requires_collection_names() {
    let (stub, client) = stub_client();
    let err = client.flush_sync(&flush_req(&[]), None).await.unwrap_err();
    assert_eq!(err, MilvusError::Validation(ValidationError::MissingCollectionNames));
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn test_flush_sync_surfaces_server_failure() {
    let (stub, client) = stub_client();
    stub.respond(
        Method::Flush,
        &FlushResponse {
            status: Some(Status::failure(ErrorCode::UnexpectedError, "segment lost")),
            ..Default::default()
        },
    );

    let err = client.flush_sync(&flush_req(&["books"]), None).await.unwrap_err();
    assert_eq!(
        err,
        MilvusError::Server {
            code: "UnexpectedError".to_string(),
            reason: "segment lost".to_string(),
        }
    );
    assert_eq!(stub.call_count(Method::GetFlushState), 0);
}

#[tokio::test]
async fn test_flush_sync_gives_up_after_max_attempts() {
    let mut config = ClientConfig::new("localhost:19530");
    config.poll.interval_ms = 1;
    config.poll.max_attempts = Some(4);
    let (stub, client) = stub_client_with(config);
    stub.respond(Method::Flush, &flush_books())
        .respond(Method::GetFlushState, &flushed(false));

    let err = client.flush_sync(&flush_req(&["books"]), None).await.unwrap_err();
    assert!(matches!(err, MilvusError::PollTimeout { attempts: 4, .. }));
    assert_eq!(stub.call_count(Method::GetFlushState), 4);
}

#[tokio::test]
async fn test_cancelled_flush_sync_stops_polling() {
    let (stub, client) = stub_client();
    stub.respond(Method::Flush, &flush_books())
        .respond(Method::GetFlushState, &flushed(false));

    let token = CancellationToken::new();
    token.cancel();
    let err = client
        .flush_sync(&flush_req(&["books"]), Some(&token))
        .await
        .unwrap_err();
    assert!(matches!(err, MilvusError::PollCancelled { .. }));
    assert_eq!(stub.call_count(Method::GetFlushState), 0);
}

#[tokio::test]
async fn test_load_collection_sync_waits_for_full_progress() {
    let (stub, client) = stub_client();
    stub.respond(Method::LoadCollection, &Status::success())
        .respond(Method::GetLoadingProgress, &progress(10))
        .respond(Method::GetLoadingProgress, &progress(60))
        .respond(Method::GetLoadingProgress, &progress(100));

    let status = client
        .load_collection_sync(&LoadCollectionReq::new("books"), None)
        .await
        .unwrap();
    assert!(status.is_success());
    assert_eq!(stub.call_count(Method::GetLoadingProgress), 3);
}

#[tokio::test]
async fn test_load_collection_sync_surfaces_progress_failure() {
    let (stub, client) = stub_client();
    stub.respond(Method::LoadCollection, &Status::success())
        .respond(
            Method::GetLoadingProgress,
            &GetLoadingProgressResponse {
                status: Some(Status::failure(ErrorCode::UnexpectedError, "no replica")),
                ..Default::default()
            },
        );

    let err = client
        .load_collection_sync(&LoadCollectionReq::new("books"), None)
        .await
        .unwrap_err();
    assert!(matches!(err, MilvusError::Server { ref reason, .. } if reason == "no replica"));
    assert_eq!(stub.call_count(Method::GetLoadingProgress), 1);
}

#[tokio::test]
async fn test_rejected_load_is_not_polled() {
    let (stub, client) = stub_client();
    stub.respond(
        Method::LoadCollection,
        &Status::failure(ErrorCode::CollectionNotExists, "can't find collection: ghost"),
    );

    let err = client
        .load_collection_sync(&LoadCollectionReq::new("ghost"), None)
        .await
        .unwrap_err();
    assert!(matches!(err, MilvusError::Server { .. }));
    assert_eq!(stub.call_count(Method::GetLoadingProgress), 0);
}
