//! End-to-end tests for the class extension pass.
//!
//! Each test lays out a composer-style project tree (vendor packages plus a
//! root package), hands the host state to the pre-autoload-dump hook, and
//! checks the files written and the autoload entries registered.

use assert_fs::prelude::*;
use assert_fs::TempDir;
use extend_core::{pre_autoload_dump, BuildContext, InstalledPackage};
use extend_meta::Package;
use extend_rewrite::RewriteWarning;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::path::Path;

const VENDOR_WIDGET_PHP: &str = r#"<?php

namespace Acme\Widgets;

class Widget
{
    public function render(): string
    {
        return '<div class="widget"></div>';
    }
}
"#;

const APP_WIDGET_PHP: &str = r#"<?php

namespace Acme\Widgets;

class Widget extends Widget_Old
{
    public function render(): string
    {
        return '<section>' . parent::render() . '</section>';
    }
}
"#;

fn installed(json: &str, base_dir: &Path) -> InstalledPackage {
    InstalledPackage::new(Package::from_json(json).unwrap(), base_dir)
}

/// Standard tree: `acme/widgets` in vendor, the root package overriding
/// `Acme\Widgets\Widget` with `App\Widget`.
fn setup_project() -> (TempDir, BuildContext) {
    let temp = TempDir::new().unwrap();

    temp.child("vendor/acme/widgets/src/Widget.php")
        .write_str(VENDOR_WIDGET_PHP)
        .unwrap();
    temp.child("src/Widget.php").write_str(APP_WIDGET_PHP).unwrap();

    let dependency = installed(
        r#"{ "name": "acme/widgets", "autoload": { "psr-4": { "Acme\\Widgets\\": "src/" } } }"#,
        &temp.path().join("vendor/acme/widgets"),
    );
    let root = installed(
        r#"
{
    "name": "app/app",
    "autoload": { "psr-4": { "App\\": "src/" } },
    "extra": {
        "composer-extend-class": { "Acme\\Widgets\\Widget": "App\\Widget" }
    }
}
"#,
        temp.path(),
    );

    let context = BuildContext::new(root, vec![dependency]);
    (temp, context)
}

#[test]
fn full_pass_writes_copy_and_registers_prefix() {
    let _ = extend_core::logging::init();
    let (temp, context) = setup_project();

    let outcome = pre_autoload_dump(&context).unwrap();

    // One copy, renamed, next to the overriding class.
    let copy = temp.child("src/Widget_Old.php");
    copy.assert(predicate::path::is_file());
    copy.assert(predicate::str::contains("class Widget_Old"));
    copy.assert(predicate::str::contains("namespace Acme\\Widgets;"));
    copy.assert(predicate::str::contains(r#"'<div class="widget"></div>'"#));
    // The override file itself is untouched.
    temp.child("src/Widget.php")
        .assert(predicate::str::contains("class Widget extends Widget_Old"));

    assert_eq!(outcome.report.rewritten.len(), 1);
    assert!(outcome.report.warnings.is_empty());

    let record = &outcome.report.rewritten[0];
    assert_eq!(record.old_class.as_str(), "Acme\\Widgets\\Widget");
    assert_eq!(record.namespace_prefix, "Acme\\Widgets\\");
    assert!(record.renamed);

    // The registered dir shadows the vendor dir for the old namespace, and
    // the copy is kept out of the flat classmap.
    let app_src = dunce_canonical(&temp.path().join("src"));
    let dirs = outcome.autoload.psr4().get("Acme\\Widgets\\").unwrap();
    assert_eq!(dirs[0], app_src);
    assert!(dirs.len() >= 2);
    assert_eq!(
        outcome.autoload.excluded_from_classmap(),
        [app_src.join("Widget_Old.php")]
    );
}

#[test]
fn second_dump_event_is_idempotent() {
    let (temp, context) = setup_project();

    pre_autoload_dump(&context).unwrap();
    let first = std::fs::read(temp.path().join("src/Widget_Old.php")).unwrap();

    let outcome = pre_autoload_dump(&context).unwrap();
    let second = std::fs::read(temp.path().join("src/Widget_Old.php")).unwrap();

    assert_eq!(first, second);
    assert!(outcome.report.rewritten[0].up_to_date);
}

#[test]
fn declaration_in_installed_package_is_honored() {
    let temp = TempDir::new().unwrap();

    temp.child("vendor/acme/widgets/src/Widget.php")
        .write_str(VENDOR_WIDGET_PHP)
        .unwrap();
    temp.child("vendor/acme/overrides/src/Widget.php")
        .write_str("<?php\n\nnamespace Overrides;\n\nclass Widget extends \\Acme\\Widgets\\Widget_Old {}\n")
        .unwrap();

    let widgets = installed(
        r#"{ "name": "acme/widgets", "autoload": { "psr-4": { "Acme\\Widgets\\": "src/" } } }"#,
        &temp.path().join("vendor/acme/widgets"),
    );
    let overrides = installed(
        r#"
{
    "name": "acme/overrides",
    "autoload": { "psr-4": { "Overrides\\": "src/" } },
    "extra": {
        "composer-extend-class": { "Acme\\Widgets\\Widget": "Overrides\\Widget" }
    }
}
"#,
        &temp.path().join("vendor/acme/overrides"),
    );
    let root = installed(r#"{ "name": "app/app" }"#, temp.path());

    let context = BuildContext::new(root, vec![widgets, overrides]);
    let outcome = pre_autoload_dump(&context).unwrap();

    assert_eq!(outcome.report.rewritten.len(), 1);
    temp.child("vendor/acme/overrides/src/Widget_Old.php")
        .assert(predicate::str::contains("class Widget_Old"));
}

#[test]
fn root_declaration_wins_over_installed_package() {
    let temp = TempDir::new().unwrap();

    temp.child("vendor/acme/widgets/src/Widget.php")
        .write_str(VENDOR_WIDGET_PHP)
        .unwrap();
    temp.child("vendor/acme/overrides/src/Widget.php")
        .write_str("<?php\n\nnamespace Overrides;\n\nclass Widget {}\n")
        .unwrap();
    temp.child("src/Widget.php").write_str(APP_WIDGET_PHP).unwrap();

    let widgets = installed(
        r#"{ "name": "acme/widgets", "autoload": { "psr-4": { "Acme\\Widgets\\": "src/" } } }"#,
        &temp.path().join("vendor/acme/widgets"),
    );
    let overrides = installed(
        r#"
{
    "name": "acme/overrides",
    "autoload": { "psr-4": { "Overrides\\": "src/" } },
    "extra": {
        "composer-extend-class": { "Acme\\Widgets\\Widget": "Overrides\\Widget" }
    }
}
"#,
        &temp.path().join("vendor/acme/overrides"),
    );
    let root = installed(
        r#"
{
    "name": "app/app",
    "autoload": { "psr-4": { "App\\": "src/" } },
    "extra": {
        "composer-extend-class": { "Acme\\Widgets\\Widget": "App\\Widget" }
    }
}
"#,
        temp.path(),
    );

    let context = BuildContext::new(root, vec![widgets, overrides]);
    let outcome = pre_autoload_dump(&context).unwrap();

    // Only the root's declaration applies: the copy lands in src/, not in
    // the overrides package.
    assert_eq!(outcome.report.rewritten.len(), 1);
    temp.child("src/Widget_Old.php").assert(predicate::path::is_file());
    temp.child("vendor/acme/overrides/src/Widget_Old.php")
        .assert(predicate::path::missing());
}

#[test]
fn misspelled_class_aborts_with_no_files_written() {
    let temp = TempDir::new().unwrap();

    temp.child("vendor/acme/widgets/src/Widget.php")
        .write_str(VENDOR_WIDGET_PHP)
        .unwrap();
    temp.child("src/Widget.php").write_str(APP_WIDGET_PHP).unwrap();

    let dependency = installed(
        r#"{ "name": "acme/widgets", "autoload": { "psr-4": { "Acme\\Widgets\\": "src/" } } }"#,
        &temp.path().join("vendor/acme/widgets"),
    );
    // Valid declaration first, misspelled one second: staging must keep the
    // valid one from being applied too.
    let root = installed(
        r#"
{
    "name": "app/app",
    "autoload": { "psr-4": { "App\\": "src/" } },
    "extra": {
        "composer-extend-class": {
            "Acme\\Widgets\\Widget": "App\\Widget",
            "Acme\\Widgets\\Wdiget": "App\\Widget"
        }
    }
}
"#,
        temp.path(),
    );

    let context = BuildContext::new(root, vec![dependency]);
    let err = pre_autoload_dump(&context).unwrap_err();

    assert!(matches!(err, extend_core::Error::Rewrite(_)));
    assert!(err.to_string().contains("Wdiget"), "error names the class: {err}");
    temp.child("src/Widget_Old.php").assert(predicate::path::missing());
}

#[test]
fn copy_without_matching_declaration_is_reported() {
    let temp = TempDir::new().unwrap();

    // The "class" lives in a file that only defines functions.
    temp.child("vendor/acme/widgets/src/Widget.php")
        .write_str("<?php\n\nnamespace Acme\\Widgets;\n\nfunction widget() { return 1; }\n")
        .unwrap();
    temp.child("src/Widget.php").write_str(APP_WIDGET_PHP).unwrap();

    let dependency = installed(
        r#"{ "name": "acme/widgets", "autoload": { "psr-4": { "Acme\\Widgets\\": "src/" } } }"#,
        &temp.path().join("vendor/acme/widgets"),
    );
    let root = installed(
        r#"
{
    "name": "app/app",
    "autoload": { "psr-4": { "App\\": "src/" } },
    "extra": {
        "composer-extend-class": { "Acme\\Widgets\\Widget": "App\\Widget" }
    }
}
"#,
        temp.path(),
    );

    let context = BuildContext::new(root, vec![dependency]);
    let outcome = pre_autoload_dump(&context).unwrap();

    assert_eq!(outcome.report.warnings.len(), 1);
    let warning = &outcome.report.warnings[0];
    assert!(matches!(warning, RewriteWarning::RenamePatternMissed { .. }));
    assert!(warning.to_string().contains("Widget"));

    // The copy still happened, verbatim.
    temp.child("src/Widget_Old.php")
        .assert(predicate::str::contains("function widget()"));
}

#[test]
fn classmap_entry_resolves_the_old_class() {
    let temp = TempDir::new().unwrap();

    temp.child("vendor/acme/legacy/Widget.php")
        .write_str("<?php\n\nclass Legacy_Widget\n{\n}\n")
        .unwrap();
    temp.child("src/LegacyWidget.php")
        .write_str("<?php\n\nclass Legacy_Widget extends Legacy_Widget_Old {}\n")
        .unwrap();

    let legacy = installed(
        r#"{ "name": "acme/legacy", "autoload": { "classmap": { "Legacy_Widget": "Widget.php" } } }"#,
        &temp.path().join("vendor/acme/legacy"),
    );
    let root = installed(
        r#"
{
    "name": "app/app",
    "autoload": { "classmap": { "App\\LegacyWidget": "src/LegacyWidget.php" } },
    "extra": {
        "composer-extend-class": { "Legacy_Widget": "App\\LegacyWidget" }
    }
}
"#,
        temp.path(),
    );

    let context = BuildContext::new(root, vec![legacy]);
    let outcome = pre_autoload_dump(&context).unwrap();

    // Global class: empty namespace prefix, copy named after the new file.
    let record = &outcome.report.rewritten[0];
    assert_eq!(record.namespace_prefix, "");
    temp.child("src/LegacyWidget_Old.php")
        .assert(predicate::str::contains("class Legacy_Widget_Old"));
}

fn dunce_canonical(path: &Path) -> std::path::PathBuf {
    dunce::canonicalize(path).unwrap()
}
