//! Static datasets used across harnesses.

/// The canonical four-member dataset as a JSON document; equivalent to
/// `InMemoryStore::sample()`.
pub const DATASET_SAMPLE: &str = r#"{
  "teams": ["teamA", "teamB"],
  "members": [
    { "username": "member1", "age": 10, "team": "teamA" },
    { "username": "member2", "age": 20, "team": "teamA" },
    { "username": "member3", "age": 30, "team": "teamB" },
    { "username": "member4", "age": 40, "team": "teamB" }
  ]
}"#;

/// Sample dataset plus a member with no team.
pub const DATASET_WITH_LONER: &str = r#"{
  "teams": ["teamA", "teamB"],
  "members": [
    { "username": "member1", "age": 10, "team": "teamA" },
    { "username": "member2", "age": 20, "team": "teamA" },
    { "username": "member3", "age": 30, "team": "teamB" },
    { "username": "member4", "age": 40, "team": "teamB" },
    { "username": "loner", "age": 35 }
  ]
}"#;

/// Write `contents` to a temp file with the given extension and return it.
pub fn temp_file(contents: &str, suffix: &str) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}
