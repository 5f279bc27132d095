use crate::kernel::language::LanguageId;

#[test]
fn from_path_maps_known_extensions() {
    let cases = [
        ("src/app.ts", LanguageId::TypeScript),
        ("src/App.tsx", LanguageId::TypeScript),
        ("lib/a.mts", LanguageId::TypeScript),
        ("index.js", LanguageId::JavaScript),
        ("index.jsx", LanguageId::JavaScript),
        ("rollup.config.mjs", LanguageId::JavaScript),
        ("package.json", LanguageId::Json),
        ("tsconfig.jsonc", LanguageId::Json),
        ("styles/main.css", LanguageId::Css),
        ("styles/main.scss", LanguageId::Scss),
        ("styles/main.less", LanguageId::Less),
        ("public/index.html", LanguageId::Html),
        ("README.md", LanguageId::Markdown),
        (".github/ci.yml", LanguageId::Yaml),
        ("Cargo.toml", LanguageId::Toml),
        ("icon.svg", LanguageId::Xml),
        ("main.rs", LanguageId::Rust),
        ("tool.py", LanguageId::Python),
        ("main.go", LanguageId::Go),
        ("build.sh", LanguageId::Shell),
        ("schema.sql", LanguageId::Sql),
    ];
    for (path, expected) in cases {
        assert_eq!(LanguageId::from_path(path), expected, "{path}");
    }
}

#[test]
fn extension_match_ignores_case() {
    assert_eq!(LanguageId::from_path("README.MD"), LanguageId::Markdown);
    assert_eq!(LanguageId::from_path("App.TSX"), LanguageId::TypeScript);
}

#[test]
fn unknown_and_missing_extensions_are_plain_text() {
    for path in ["LICENSE", "src/.gitignore", ".env", "notes.txt", "archive.tar.xz", "dir.d/Makefile"] {
        assert_eq!(LanguageId::from_path(path), LanguageId::PlainText, "{path}");
    }
}

#[test]
fn dotted_directories_do_not_leak_into_the_extension() {
    assert_eq!(LanguageId::from_path("v1.2/readme"), LanguageId::PlainText);
    assert_eq!(LanguageId::from_path("v1.2/readme.md"), LanguageId::Markdown);
}

#[test]
fn widget_ids_and_display_names() {
    assert_eq!(LanguageId::TypeScript.language_id(), "typescript");
    assert_eq!(LanguageId::PlainText.language_id(), "plaintext");
    assert_eq!(LanguageId::Json.display_name(), "JSON");
    assert_eq!(LanguageId::PlainText.display_name(), "Plain Text");
}
