//! Tests for the generate command against real model files

use std::fs;
use std::path::PathBuf;

use depdot::cli::Commands;
use depdot::commands::execute_command;
use pretty_assertions::assert_eq;

const MODEL_JSON: &str = r#"{
    "name": "single",
    "configurations": [{
        "name": "compileClasspath",
        "dependencies": [{
            "group": "org.jetbrains.kotlin",
            "artifact": "kotlin-stdlib",
            "version": "1.2.30",
            "children": [{
                "group": "org.jetbrains",
                "artifact": "annotations",
                "version": "13.0"
            }]
        }]
    }]
}"#;

fn generate_command(model: PathBuf, output: PathBuf) -> Commands {
    Commands::Generate {
        model,
        output: Some(output),
        exclude_projects: vec![],
        exclude_configurations: vec![],
        exclude_groups: vec![],
        no_transitives: false,
        label: None,
    }
}

#[test]
fn test_generate_writes_dot_file_from_json_model() {
    let dir = tempfile::tempdir().unwrap();
    let model_path = dir.path().join("model.json");
    let output_path = dir.path().join("dependencies.dot");
    fs::write(&model_path, MODEL_JSON).unwrap();

    execute_command(generate_command(model_path, output_path.clone())).unwrap();

    let dot = fs::read_to_string(output_path).unwrap();
    assert_eq!(
        dot,
        "digraph \"G\" {\n\
         \"single\" [\"shape\"=\"rectangle\"]\n\
         \"kotlin-stdlib\" [\"shape\"=\"rectangle\"]\n\
         \"jetbrains-annotations\" [\"shape\"=\"rectangle\"]\n\
         \"single\" -> \"kotlin-stdlib\"\n\
         \"kotlin-stdlib\" -> \"jetbrains-annotations\"\n\
         }\n"
    );
}

#[test]
fn test_generate_reads_toml_models() {
    let dir = tempfile::tempdir().unwrap();
    let model_path = dir.path().join("model.toml");
    let output_path = dir.path().join("dependencies.dot");
    fs::write(
        &model_path,
        r#"
            name = "app"

            [[configurations]]
            name = "runtimeClasspath"

            [[configurations.dependencies]]
            group = "junit"
            artifact = "junit"
            version = "4.12"
        "#,
    )
    .unwrap();

    execute_command(generate_command(model_path, output_path.clone())).unwrap();

    let dot = fs::read_to_string(output_path).unwrap();
    assert_eq!(
        dot,
        "digraph \"G\" {\n\
         \"app\" [\"shape\"=\"rectangle\"]\n\
         \"junit\" [\"shape\"=\"rectangle\"]\n\
         \"app\" -> \"junit\"\n\
         }\n"
    );
}

#[test]
fn test_generate_applies_exclusions_and_label() {
    let dir = tempfile::tempdir().unwrap();
    let model_path = dir.path().join("model.json");
    let output_path = dir.path().join("dependencies.dot");
    fs::write(&model_path, MODEL_JSON).unwrap();

    let command = Commands::Generate {
        model: model_path,
        output: Some(output_path.clone()),
        exclude_projects: vec![],
        exclude_configurations: vec![],
        exclude_groups: vec!["org.jetbrains.kotlin".to_string()],
        no_transitives: false,
        label: Some("my header".to_string()),
    };

    execute_command(command).unwrap();

    let dot = fs::read_to_string(output_path).unwrap();
    assert_eq!(
        dot,
        "digraph \"G\" {\n\
         \"label\"=\"my header\"\n\
         \"single\" [\"shape\"=\"rectangle\"]\n\
         }\n"
    );
}

#[test]
fn test_generate_no_transitives_stops_at_first_level() {
    let dir = tempfile::tempdir().unwrap();
    let model_path = dir.path().join("model.json");
    let output_path = dir.path().join("dependencies.dot");
    fs::write(&model_path, MODEL_JSON).unwrap();

    let command = Commands::Generate {
        model: model_path,
        output: Some(output_path.clone()),
        exclude_projects: vec![],
        exclude_configurations: vec![],
        exclude_groups: vec![],
        no_transitives: true,
        label: None,
    };

    execute_command(command).unwrap();

    let dot = fs::read_to_string(output_path).unwrap();
    assert_eq!(
        dot,
        "digraph \"G\" {\n\
         \"single\" [\"shape\"=\"rectangle\"]\n\
         \"kotlin-stdlib\" [\"shape\"=\"rectangle\"]\n\
         \"single\" -> \"kotlin-stdlib\"\n\
         }\n"
    );
}

#[test]
fn test_generate_fails_on_missing_model() {
    let dir = tempfile::tempdir().unwrap();
    let command = generate_command(
        dir.path().join("missing.json"),
        dir.path().join("dependencies.dot"),
    );

    assert!(execute_command(command).is_err());
}
