use super::*;

fn parse(args: &[&str]) -> Cli {
    let mut full = vec!["tpatbi-score"];
    full.extend_from_slice(args);
    Cli::try_parse_from(full).unwrap()
}

#[test]
fn test_parse_tbi_subcommand() {
    let cli = parse(&[
        "tbi",
        "--name",
        "Maya",
        "--listening",
        "50",
        "--structure",
        "47.5",
        "--reading",
        "60",
        "--ip",
        "10.1.1.1",
    ]);
    match cli.command {
        Command::Tbi {
            name,
            listening,
            structure,
            reading,
        } => {
            assert_eq!(name, "Maya");
            assert_eq!(listening, "50");
            assert_eq!(structure, "47.5");
            assert_eq!(reading, "60");
        }
        other => panic!("unexpected command {other:?}"),
    }
    assert_eq!(cli.common.ip.as_deref(), Some("10.1.1.1"));
}

#[test]
fn test_tpa_fields_default_to_zero() {
    let cli = parse(&["tpa", "--name", "Nina"]);
    match cli.command {
        Command::Tpa {
            verbal,
            numerical,
            figural,
            ..
        } => {
            assert_eq!([verbal, numerical, figural], ["0", "0", "0"]);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_non_numeric_fields_reach_validation() {
    let cli = parse(&["tpa", "--verbal", "delapan puluh", "--numerical", "-5"]);
    match cli.command {
        Command::Tpa {
            verbal, numerical, ..
        } => {
            assert_eq!(verbal, "delapan puluh");
            assert_eq!(numerical, "-5");
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_global_options_after_subcommand() {
    let cli = parse(&[
        "tbi",
        "--log",
        "results.jsonl",
        "--log-format",
        "jsonl",
        "--session-id",
        "00000000-0000-0000-0000-000000000007",
    ]);
    assert_eq!(cli.common.log, Some(PathBuf::from("results.jsonl")));
    assert_eq!(cli.common.log_format, Some(LogFormat::Jsonl));
    assert_eq!(cli.common.session_id, Some(Uuid::from_u128(7)));
}

#[test]
fn test_resolve_config_cli_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    std::fs::write(
        &config_path,
        r#"{"organization": "Panitia", "out_dir": "docs", "log": {"path": "file.tsv"}}"#,
    )
    .unwrap();

    let cli = parse(&[
        "tpa",
        "--config",
        config_path.to_str().unwrap(),
        "--out",
        "elsewhere",
        "--log-format",
        "jsonl",
    ]);
    let config = resolve_config(&cli.common).unwrap();
    assert_eq!(config.organization, "Panitia");
    assert_eq!(config.out_dir, PathBuf::from("elsewhere"));
    assert_eq!(
        config.log,
        Some(LogConfig {
            path: PathBuf::from("file.tsv"),
            format: LogFormat::Jsonl,
        })
    );

    let cli = parse(&["tpa", "--log", "cli.tsv"]);
    let config = resolve_config(&cli.common).unwrap();
    assert_eq!(config.out_dir, PathBuf::from("."));
    assert_eq!(
        config.log,
        Some(LogConfig {
            path: PathBuf::from("cli.tsv"),
            format: LogFormat::Tsv,
        })
    );
}

#[test]
fn test_document_path() {
    let out = document_path(Path::new("/tmp/out"), TestKind::Tbi, None);
    assert_eq!(out, PathBuf::from("/tmp/out/hasil_perhitungan_tbi.txt"));
    let out = document_path(Path::new("/tmp/out"), TestKind::Tpa, Some(3));
    assert_eq!(out, PathBuf::from("/tmp/out/hasil_perhitungan_tpa_3.txt"));
}

#[test]
fn test_parse_batch_line() {
    let raw = parse_batch_line(1, "TBI\tOki\t50\t47.5\t60").unwrap();
    assert_eq!(raw.kind, TestKind::Tbi);
    assert_eq!(raw.name, "Oki");
    assert_eq!(raw.fields, ["50", "47.5", "60"].map(str::to_string));

    assert!(matches!(
        parse_batch_line(2, "TBI\tOki\t50"),
        Err(AppError::Batch { line: 2, .. })
    ));
    assert!(matches!(
        parse_batch_line(3, "IELTS\tOki\t1\t2\t3"),
        Err(AppError::Batch { line: 3, .. })
    ));
}

#[test]
fn test_run_batch_writes_documents_and_log() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("batch.tsv");
    std::fs::write(
        &input,
        "# kind\tname\ta\tb\tc\nTPA\tPuti\t80\t70\t90\nTBI\tRian\tx\t50\t50\n\nTBI\tSinta\t100\t100\t100\n",
    )
    .unwrap();
    let config = RunConfig {
        organization: "Panitia".to_string(),
        out_dir: dir.path().join("docs"),
        log: None,
    };
    let mut session = Session::new(ScoringProfile::default_v1());
    let mut sink = crate::sink::MemorySink::default();
    run_batch(
        &input,
        &config,
        &mut session,
        &TextDocumentRenderer::new("Panitia"),
        &mut sink,
        &ProvidedMetadata::default(),
    )
    .unwrap();

    assert_eq!(sink.rows.len(), 2);
    assert!(config.out_dir.join("hasil_perhitungan_tpa_2.txt").exists());
    assert!(!config.out_dir.join("hasil_perhitungan_tbi_3.txt").exists());
    assert!(config.out_dir.join("hasil_perhitungan_tbi_5.txt").exists());
    let last = session.last().unwrap();
    assert_eq!(last.record.subject_name, "Sinta");
    assert_eq!(last.record.composite, 676.67);
}

#[test]
fn test_run_batch_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let config = RunConfig {
        organization: "X".to_string(),
        out_dir: dir.path().to_path_buf(),
        log: None,
    };
    let mut session = Session::new(ScoringProfile::default_v1());
    let err = run_batch(
        &dir.path().join("none.tsv"),
        &config,
        &mut session,
        &TextDocumentRenderer::default(),
        &mut crate::sink::DisconnectedSink,
        &ProvidedMetadata::default(),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::Input { .. }));
}
