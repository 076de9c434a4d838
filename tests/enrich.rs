//! End-to-end enrichment over a CSV catalog with a mocked Modrinth API.

use std::fs;
use std::time::Duration;

use mockito::{Matcher, Server};
use tempfile::TempDir;

use mod_compat::catalog::{read_catalog, write_catalog};
use mod_compat::enrich::Enricher;
use mod_compat::provider::ModrinthClient;

const EXPECTED_HEADER: &str = "mod name,mc_version,latest_version_available,compatibility_flag,\
                               mod version number,author,project id,file id,source,url,loader,\
                               dependencies,required";

#[tokio::test]
async fn blank_row_is_fully_enriched_from_modrinth() {
    let mut server = Server::new_async().await;

    let search_mock = server
        .mock("GET", "/search")
        .match_query(Matcher::UrlEncoded("query".into(), "ExampleMod".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"hits": [{"project_id": "abc123", "slug": "example-mod", "author": "Jane"}]}"#,
        )
        .create_async()
        .await;

    let versions_mock = server
        .mock("GET", "/project/abc123/version")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id": "v9", "game_versions": ["1.18.2", "1.21.3"]}]"#)
        .create_async()
        .await;

    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.csv");
    let output = temp_dir.path().join("out.csv");
    fs::write(
        &input,
        "mod name,source,project id,url,author\nExampleMod,,,,\n",
    )
    .unwrap();

    let modrinth = ModrinthClient::new(&server.url());
    let mut records = read_catalog(&input).unwrap();
    Enricher::new(None, &modrinth)
        .with_delay(Duration::ZERO)
        .run(&mut records)
        .await;
    write_catalog(&output, &records).unwrap();

    search_mock.assert_async().await;
    versions_mock.assert_async().await;

    let enriched = read_catalog(&output).unwrap();
    assert_eq!(enriched.len(), 1);
    let row = &enriched[0];
    assert_eq!(row.mod_name, "ExampleMod");
    assert_eq!(row.source, "Modrinth");
    assert_eq!(row.project_id, "abc123");
    assert_eq!(row.url, "https://modrinth.com/mod/example-mod");
    assert_eq!(row.author, "Jane");
    assert_eq!(row.latest_version_available, "1.21.3");
    assert_eq!(row.file_id, "v9");
    assert_eq!(row.compatibility_flag.as_deref(), Some("1.21.x"));
}

#[tokio::test]
async fn output_has_fixed_column_order_regardless_of_input_shape() {
    let mut server = Server::new_async().await;

    // Search misses; the row keeps whatever it had and only the flag is
    // recomputed.
    let search_mock = server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"hits": []}"#)
        .create_async()
        .await;

    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.csv");
    let output = temp_dir.path().join("out.csv");

    // Shuffled columns plus an extra one that must be dropped.
    fs::write(
        &input,
        "url,mod name,scratch notes,loader\nhttps://example.com,SomeMod,ignore me,fabric\n",
    )
    .unwrap();

    let modrinth = ModrinthClient::new(&server.url());
    let mut records = read_catalog(&input).unwrap();
    Enricher::new(None, &modrinth)
        .with_delay(Duration::ZERO)
        .run(&mut records)
        .await;
    write_catalog(&output, &records).unwrap();

    search_mock.assert_async().await;

    let contents = fs::read_to_string(&output).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next().unwrap(), EXPECTED_HEADER);
    assert_eq!(
        lines.next().unwrap(),
        "SomeMod,,,,,,,,,https://example.com,fabric,,"
    );
}

#[tokio::test]
async fn provider_failure_leaves_derived_fields_absent() {
    let mut server = Server::new_async().await;

    let search_mock = server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.csv");
    let output = temp_dir.path().join("out.csv");
    fs::write(&input, "mod name\nUnluckyMod\n").unwrap();

    let modrinth = ModrinthClient::new(&server.url());
    let mut records = read_catalog(&input).unwrap();
    Enricher::new(None, &modrinth)
        .with_delay(Duration::ZERO)
        .run(&mut records)
        .await;
    write_catalog(&output, &records).unwrap();

    search_mock.assert_async().await;

    let enriched = read_catalog(&output).unwrap();
    assert_eq!(enriched[0].project_id, "");
    assert_eq!(enriched[0].latest_version_available, "");
    assert_eq!(enriched[0].compatibility_flag, None);
}
