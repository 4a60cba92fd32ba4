use curl_report::{generate, parse, Flavor, InputFormat};

#[test]
fn runs_commands_in_order_and_renders_stdout() {
    let plan = parse(
        r#"
tests = [
  ["first", "/one", "echo one"],
  ["failing", "/two", "echo partial; echo hidden >&2; exit 7"],
  ["third", "/three", "echo three"],
]
"#,
        InputFormat::Toml,
    )
    .unwrap();

    let doc = generate(&plan, Flavor::Org);

    let first = doc.find("** first").unwrap();
    let failing = doc.find("** failing").unwrap();
    let third = doc.find("** third").unwrap();
    assert!(first < failing && failing < third);
    assert!(doc.contains("#+BEGIN_EXAMPLE\none\n"));
    assert!(doc.contains("#+BEGIN_EXAMPLE\npartial\n"));
    assert!(!doc.contains("hidden"));
}

#[test]
fn markdown_flavor_uses_fenced_blocks() {
    let plan = parse(r#"{"tests": [["echo", "/e", "echo hi"]]}"#, InputFormat::Json).unwrap();
    let doc = generate(&plan, Flavor::Markdown);
    assert!(doc.starts_with("# curl tests of REST API\n"));
    assert!(doc.contains("```sh\necho hi\n```"));
    assert!(doc.contains("### Output\n\n```\nhi\n```"));
}
