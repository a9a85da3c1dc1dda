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

use prost::Message;
use serde_json::json;

use common::{bits_schema, books_schema, describe_ok, stub_client};
use milvus_client::codec::key_value::find_key_value;
use milvus_client::proto::common::{ErrorCode, PlaceholderGroup, PlaceholderType, Status};
use milvus_client::proto::milvus::{QueryRequest, QueryResults as WireQueryResults, SearchRequest, SearchResults as WireSearchResults};
use milvus_client::proto::schema::{
    field_data, i_ds, scalar_field, DataType, FieldData, LongArray, ScalarField, SearchResultData, IDs,
};
use milvus_client::{
    CountReq, DimensionCheck, FieldValue, GetReq, Method, MilvusError, PrimaryKey, QueryReq, SchemaError,
    SearchParams, SearchReq, SearchSimpleReq, ValidationError, VectorData,
};

fn long_column(name: &str, data: Vec<i64>) -> FieldData {
    FieldData {
        r#type: DataType::Int64 as i32,
        field_name: name.to_string(),
        field: Some(field_data::Field::Scalars(ScalarField {
            data: Some(scalar_field::Data::LongData(LongArray { data })),
        })),
        ..Default::default()
    }
}

fn two_query_results(scores: Vec<f32>) -> WireSearchResults {
    WireSearchResults {
        status: Some(Status::success()),
        results: Some(SearchResultData {
            num_queries: 2,
            top_k: 2,
            topks: vec![2, 1],
            scores,
            ids: Some(IDs {
                id_field: Some(i_ds::IdField::IntId(LongArray { data: vec![10, 11, 12] })),
            }),
            fields_data: vec![long_column("age", vec![5, 6, 7])],
            output_fields: vec!["age".to_string()],
        }),
        collection_name: "books".to_string(),
    }
}

fn detailed(vectors: Vec<VectorData>, round_decimal: Option<i32>) -> SearchReq {
    SearchReq {
        collection_name: "books".to_string(),
        expr: Some("age > 1".to_string()),
        search_params: SearchParams {
            anns_field: Some("vec".to_string()),
            topk: Some(2),
            metric_type: Some("L2".to_string()),
            params: Some(json!({"nprobe": 10}).to_string()),
            round_decimal,
        },
        vectors,
        vector_type: Some(DataType::FloatVector),
        output_fields: vec!["age".to_string()],
        ..Default::default()
    }
}

#[tokio::test]
async fn test_search_pivots_rows_per_query() {
    let (stub, client) = stub_client();
    stub.respond(Method::DescribeCollection, &describe_ok(books_schema()))
        .respond(Method::Search, &two_query_results(vec![0.1, 0.2, 0.3]));

    let req = detailed(
        vec![
            VectorData::Float(vec![0.1, 0.2, 0.3, 0.4]),
            VectorData::Float(vec![0.5, 0.6, 0.7, 0.8]),
        ],
        None,
    );
    let results = client.search(req).await.unwrap();
    assert!(results.status.is_success());
    assert_eq!(results.results.len(), 2);

    let first: Vec<_> = results.results[0]
        .iter()
        .map(|hit| (hit.id.clone(), hit.score, hit.fields.get("age").cloned()))
        .collect();
    assert_eq!(
        first,
        vec![
            (PrimaryKey::Int(10), 0.1f32 as f64, Some(FieldValue::Int(5))),
            (PrimaryKey::Int(11), 0.2f32 as f64, Some(FieldValue::Int(6))),
        ]
    );
    assert_eq!(results.results[1].len(), 1);
    assert_eq!(results.results[1][0].id, PrimaryKey::Int(12));
    assert_eq!(results.results[1][0].fields.get("age"), Some(&FieldValue::Int(7)));

    let sent: SearchRequest = stub.last_request(Method::Search).unwrap();
    assert_eq!(sent.dsl, "age > 1");
    assert_eq!(sent.nq, 2);
    assert_eq!(find_key_value(&sent.search_params, "anns_field"), Some("vec"));
    assert_eq!(find_key_value(&sent.search_params, "topk"), Some("2"));
    assert_eq!(find_key_value(&sent.search_params, "round_decimal"), Some("-1"));

    let group = PlaceholderGroup::decode(sent.placeholder_group.as_slice()).unwrap();
    assert_eq!(group.placeholders.len(), 1);
    assert_eq!(group.placeholders[0].tag, "$0");
    assert_eq!(group.placeholders[0].r#type, PlaceholderType::FloatVector as i32);
    assert_eq!(group.placeholders[0].values.len(), 2);
    assert_eq!(group.placeholders[0].values[0].len(), 16);
}

#[tokio::test]
async fn test_scores_are_rounded_when_requested() {
    let (stub, client) = stub_client();
    stub.respond(Method::DescribeCollection, &describe_ok(books_schema()))
        .respond(Method::Search, &two_query_results(vec![3.14159, 2.71828, 1.41421]));

    let req = detailed(vec![VectorData::Float(vec![0.0; 4])], Some(2));
    let results = client.search(req).await.unwrap();
    assert_eq!(results.results[0][0].score, 3.14);
    assert_eq!(results.results[0][1].score, 2.71);
    assert_eq!(results.results[1][0].score, 1.41);

    let sent: SearchRequest = stub.last_request(Method::Search).unwrap();
    assert_eq!(find_key_value(&sent.search_params, "round_decimal"), Some("2"));
}

#[tokio::test]
async fn test_search_dimension_gate_blocks_the_call() {
    let (stub, client) = stub_client();
    stub.respond(Method::DescribeCollection, &describe_ok(books_schema()));

    let req = detailed(vec![VectorData::Float(vec![0.1, 0.2, 0.3])], None);
    let err = client.search(req).await.unwrap_err();
    assert_eq!(
        err,
        MilvusError::Schema(SchemaError::DimensionMismatch {
            check: DimensionCheck::Search,
            field: "vec".to_string(),
            expected: 4,
            actual: 3,
        })
    );
    assert_eq!(stub.call_count(Method::Search), 0);
}

#[tokio::test]
async fn test_missing_search_params_and_vector_type() {
    let (stub, client) = stub_client();

    let mut no_metric = detailed(vec![VectorData::Float(vec![0.0; 4])], None);
    no_metric.search_params.metric_type = None;
    assert_eq!(
        client.search(no_metric).await.unwrap_err(),
        MilvusError::Validation(ValidationError::MissingSearchParams("metric_type"))
    );

    let mut no_type = detailed(vec![VectorData::Float(vec![0.0; 4])], None);
    no_type.vector_type = Some(DataType::Int64);
    assert_eq!(
        client.search(no_type).await.unwrap_err(),
        MilvusError::Validation(ValidationError::MissingVectorType)
    );

    let bad_round = detailed(vec![VectorData::Float(vec![0.0; 4])], Some(9));
    assert_eq!(
        client.search(bad_round).await.unwrap_err(),
        MilvusError::Validation(ValidationError::InvalidRoundDecimal(9))
    );
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn test_vector_type_must_match_anns_field() {
    let (stub, client) = stub_client();
    stub.respond(Method::DescribeCollection, &describe_ok(bits_schema()));

    // Two floats pass the dim/8 width of a 16-bit binary field
    let mut req = detailed(vec![VectorData::Float(vec![0.5, 0.25])], None);
    req.collection_name = "bits".to_string();
    req.search_params.anns_field = Some("bits".to_string());
    assert_eq!(
        client.search(req).await.unwrap_err(),
        MilvusError::Schema(SchemaError::ValueTypeMismatch {
            field: "bits".to_string(),
            row: 0,
            data_type: "BinaryVector".to_string(),
        })
    );
    assert_eq!(stub.call_count(Method::Search), 0);
}

#[tokio::test]
async fn test_unknown_anns_field() {
    let (stub, client) = stub_client();
    stub.respond(Method::DescribeCollection, &describe_ok(books_schema()));

    let mut req = detailed(vec![VectorData::Float(vec![0.0; 4])], None);
    req.search_params.anns_field = Some("age".to_string());
    assert_eq!(
        client.search(req).await.unwrap_err(),
        MilvusError::Schema(SchemaError::VectorFieldNotFound("age".to_string()))
    );
}

#[tokio::test]
async fn test_simple_search_infers_field_and_defaults() {
    let (stub, client) = stub_client();
    stub.respond(Method::DescribeCollection, &describe_ok(bits_schema()))
        .respond(
            Method::Search,
            &WireSearchResults {
                status: Some(Status::success()),
                results: None,
                collection_name: "bits".to_string(),
            },
        );

    let req = SearchSimpleReq {
        collection_name: "bits".to_string(),
        data: vec![VectorData::Binary(vec![0xF0, 0x0F])],
        ..Default::default()
    };
    let results = client.search(req).await.unwrap();
    assert!(results.results.is_empty());

    let sent: SearchRequest = stub.last_request(Method::Search).unwrap();
    assert_eq!(find_key_value(&sent.search_params, "anns_field"), Some("bits"));
    assert_eq!(find_key_value(&sent.search_params, "topk"), Some("100"));
    assert_eq!(find_key_value(&sent.search_params, "offset"), Some("0"));
    assert_eq!(find_key_value(&sent.search_params, "params"), Some("{}"));
    assert_eq!(sent.output_fields, vec!["id".to_string()]);

    let group = PlaceholderGroup::decode(sent.placeholder_group.as_slice()).unwrap();
    assert_eq!(group.placeholders[0].r#type, PlaceholderType::BinaryVector as i32);
    assert_eq!(group.placeholders[0].values, vec![vec![0xF0, 0x0F]]);
}

#[tokio::test]
async fn test_failed_search_returns_status_without_rows() {
    let (stub, client) = stub_client();
    stub.respond(Method::DescribeCollection, &describe_ok(books_schema()))
        .respond(
            Method::Search,
            &WireSearchResults {
                status: Some(Status::failure(ErrorCode::UnexpectedError, "collection not loaded")),
                ..Default::default()
            },
        );

    let results = client
        .search(detailed(vec![VectorData::Float(vec![0.0; 4])], None))
        .await
        .unwrap();
    assert!(!results.status.is_success());
    assert_eq!(results.status.reason, "collection not loaded");
    assert!(results.results.is_empty());
}

#[tokio::test]
async fn test_identical_searches_send_identical_payloads() {
    let (stub, client) = stub_client();
    stub.respond(Method::DescribeCollection, &describe_ok(books_schema()))
        .respond(Method::Search, &two_query_results(vec![0.1, 0.2, 0.3]));

    let req = detailed(vec![VectorData::Float(vec![0.1, 0.2, 0.3, 0.4])], Some(3));
    client.search(req.clone()).await.unwrap();
    client.search(req).await.unwrap();

    let calls = stub.calls_to(Method::Search);
    assert_eq!(calls[0].payload, calls[1].payload);
}

#[tokio::test]
async fn test_query_passes_limit_and_offset() {
    let (stub, client) = stub_client();
    stub.respond(
        Method::Query,
        &WireQueryResults {
            status: Some(Status::success()),
            fields_data: vec![long_column("id", vec![1, 2]), long_column("age", vec![30, 40])],
            ..Default::default()
        },
    );

    let results = client
        .query(&QueryReq {
            collection_name: "books".to_string(),
            expr: "age > 20".to_string(),
            output_fields: vec!["id".to_string(), "age".to_string()],
            limit: Some(10),
            offset: Some(5),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(results.data.len(), 2);
    assert_eq!(results.data[1].get("age"), Some(&FieldValue::Int(40)));

    let sent: QueryRequest = stub.last_request(Method::Query).unwrap();
    assert_eq!(find_key_value(&sent.query_params, "limit"), Some("10"));
    assert_eq!(find_key_value(&sent.query_params, "offset"), Some("5"));
}

#[tokio::test]
async fn test_query_requires_filter() {
    let (_stub, client) = stub_client();
    let err = client
        .query(&QueryReq {
            collection_name: "books".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err, MilvusError::Validation(ValidationError::MissingFilter));
}

#[tokio::test]
async fn test_get_builds_primary_key_filter() {
    let (stub, client) = stub_client();
    stub.respond(Method::DescribeCollection, &describe_ok(books_schema()))
        .respond(
            Method::Query,
            &WireQueryResults {
                status: Some(Status::success()),
                fields_data: vec![long_column("id", vec![3])],
                ..Default::default()
            },
        );

    let results = client
        .get(&GetReq {
            collection_name: "books".to_string(),
            ids: vec![PrimaryKey::Int(3), PrimaryKey::Int(4)],
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(results.data.len(), 1);

    let sent: QueryRequest = stub.last_request(Method::Query).unwrap();
    assert_eq!(sent.expr, "id in [3, 4]");
}

#[tokio::test]
async fn test_count_reads_count_column() {
    let (stub, client) = stub_client();
    stub.respond(
        Method::Query,
        &WireQueryResults {
            status: Some(Status::success()),
            fields_data: vec![long_column("count(*)", vec![1234])],
            ..Default::default()
        },
    );

    let count = client
        .count(&CountReq {
            collection_name: "books".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(count.data, 1234);

    let sent: QueryRequest = stub.last_request(Method::Query).unwrap();
    assert_eq!(sent.output_fields, vec!["count(*)".to_string()]);
}
