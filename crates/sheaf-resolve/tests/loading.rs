//! Integration tests for the load step and its advisory warnings

use std::sync::Arc;

use sheaf_fs::{FsError, MemoryFileSystem};
use sheaf_resolve::{CollectedWarnings, FsModuleResolver, ResolverOptions};

fn resolver_with_warnings(files: &[(&str, &str)]) -> (Arc<CollectedWarnings>, FsModuleResolver) {
    let fs = Arc::new(MemoryFileSystem::new());
    for &(path, content) in files {
        fs.add_file(path, content);
    }
    let warnings = Arc::new(CollectedWarnings::new());
    let resolver = FsModuleResolver::with_options(
        fs,
        ResolverOptions::new().with_warning_sink(warnings.clone()),
    );
    (warnings, resolver)
}

#[test]
fn test_compiled_file_loads_without_warning() {
    let (warnings, resolver) =
        resolver_with_warnings(&[("/src/utils.js", "export const x = 1;")]);

    let content = resolver.load("/src/utils.js").unwrap();

    assert_eq!(content, "export const x = 1;");
    assert!(warnings.is_empty());
}

#[test]
fn test_typescript_source_warns_once_and_loads_anyway() {
    let (warnings, resolver) =
        resolver_with_warnings(&[("/src/legacy.ts", "const n: number = 1;")]);

    let content = resolver.load("/src/legacy.ts").unwrap();

    // The warning is advisory; the raw content still comes back.
    assert_eq!(content, "const n: number = 1;");
    assert_eq!(warnings.len(), 1);
}

#[test]
fn test_warning_names_both_paths() {
    let (warnings, resolver) = resolver_with_warnings(&[("/src/legacy.ts", "")]);

    resolver.load("/src/legacy.ts").unwrap();

    let message = &warnings.warnings()[0];
    assert!(message.contains("/src/legacy.ts"));
    assert!(message.contains("/src/legacy.js"));
}

#[test]
fn test_extension_match_is_case_insensitive() {
    let (warnings, resolver) = resolver_with_warnings(&[("/src/Widget.TSX", "")]);

    resolver.load("/src/Widget.TSX").unwrap();

    let message = &warnings.warnings()[0];
    assert!(message.contains("/src/Widget.TSX"));
    assert!(message.contains("/src/Widget.js"));
}

#[test]
fn test_tsx_in_the_middle_of_a_name_does_not_warn() {
    let (warnings, resolver) = resolver_with_warnings(&[("/src/utsx.helpers.js", "")]);

    resolver.load("/src/utsx.helpers.js").unwrap();

    assert!(warnings.is_empty());
}

#[test]
fn test_each_load_warns_independently() {
    let (warnings, resolver) = resolver_with_warnings(&[("/src/legacy.ts", "")]);

    resolver.load("/src/legacy.ts").unwrap();
    resolver.load("/src/legacy.ts").unwrap();

    assert_eq!(warnings.len(), 2);
}

#[test]
fn test_read_faults_propagate_unchanged() {
    let (warnings, resolver) = resolver_with_warnings(&[("/src/present.js", "")]);

    let err = resolver.load("/src/absent.js").unwrap_err();
    assert!(matches!(err, FsError::NotFound(_)));

    // A source-only path that is also missing still warns before the
    // read fails.
    let err = resolver.load("/src/absent.ts").unwrap_err();
    assert!(matches!(err, FsError::NotFound(_)));
    assert_eq!(warnings.len(), 1);
}

#[test]
fn test_resolve_then_load_roundtrip() {
    let (warnings, resolver) = resolver_with_warnings(&[
        ("/src/app.js", "import './utils';"),
        ("/src/utils.js", "export const x = 1;"),
    ]);

    let id = resolver
        .resolve_id("./utils", Some("/src/app.js"))
        .unwrap()
        .unwrap();
    let content = resolver.load(&id).unwrap();

    assert_eq!(content, "export const x = 1;");
    assert!(warnings.is_empty());
}
