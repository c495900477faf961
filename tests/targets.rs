use std::io::{self, Write};

use kira_mirmap::error::MirmapError;
use kira_mirmap::io::tsv_writer::is_broken_pipe;
use kira_mirmap::mapping::{GeneMap, parse_gene_map};
use kira_mirmap::mirna::{CanonicalSet, MatchRule};
use kira_mirmap::targets::{NormalizeOptions, TargetDb, normalize_targets, parse_record};

fn run(input: &str, db: TargetDb, gene_map: &GeneMap, set: &CanonicalSet) -> String {
    let mut out = Vec::new();
    normalize_targets(
        input.as_bytes(),
        &mut out,
        db,
        gene_map,
        set,
        NormalizeOptions::default(),
    )
    .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn mirdb_columns() {
    let rec = parse_record("hsa-mir-21\tFOXO1\t93.5\n", TargetDb::Mirdb, 1).unwrap();
    assert_eq!(rec.mirna, "hsa-miR-21");
    assert_eq!(rec.gene, "foxo1");
}

#[test]
fn mirtarbase_columns() {
    let line = "MIRT000002,hsa-miR-20a-5p,Homo sapiens,HIF1A,3091,Homo sapiens,Luciferase,Functional MTI,12345";
    let rec = parse_record(line, TargetDb::Mirtarbase, 1).unwrap();
    assert_eq!(rec.mirna, "hsa-miR-20a-5p");
    assert_eq!(rec.gene, "hif1a");
}

#[test]
fn invalid_selector_is_rejected() {
    let err = "targetscan".parse::<TargetDb>().unwrap_err();
    assert!(matches!(err, MirmapError::InvalidFormat(ref s) if s == "targetscan"));
    assert_eq!("mirdb".parse::<TargetDb>().unwrap(), TargetDb::Mirdb);
}

#[test]
fn short_line_is_malformed() {
    let err = parse_record("hsa-miR-21,FOXO1", TargetDb::Mirtarbase, 7).unwrap_err();
    match err {
        MirmapError::MalformedRecord {
            line,
            expected,
            found,
        } => {
            assert_eq!(line, 7);
            assert_eq!(expected, 4);
            assert_eq!(found, 2);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn fallback_lowercases_gene() {
    let out = run(
        "hsa-miR-21\tFOXO1\n",
        TargetDb::Mirdb,
        &GeneMap::new(),
        &CanonicalSet::new(),
    );
    assert_eq!(out, "hsa-miR-21\tfoxo1\n");
}

#[test]
fn gene_map_translates() {
    let map = parse_gene_map("foxo1 FOXO1_HUMAN\n".as_bytes()).unwrap();
    let out = run("hsa-miR-21\tFOXO1\n", TargetDb::Mirdb, &map, &CanonicalSet::new());
    assert_eq!(out, "hsa-miR-21\tFOXO1_HUMAN\n");
}

#[test]
fn non_human_records_are_dropped() {
    let set: CanonicalSet = ["hsa-miR-1-5p"].into_iter().collect();
    let input = "cel-miR-1834\tlin-41\nhsa-miR-1\tTAGLN2\nmmu-mir-1a\tHand2\n";
    let out = run(input, TargetDb::Mirdb, &GeneMap::new(), &set);
    assert_eq!(out, "hsa-miR-1-5p\ttagln2\n");
}

#[test]
fn mirtarbase_header_is_dropped() {
    let input = "miRTarBase ID,miRNA,Species (miRNA),Target Gene,Target Gene (Entrez ID)\nMIRT000002,hsa-miR-20a-5p,Homo sapiens,HIF1A,3091\n";
    let out = run(input, TargetDb::Mirtarbase, &GeneMap::new(), &CanonicalSet::new());
    assert_eq!(out, "hsa-miR-20a-5p\thif1a\n");
}

#[test]
fn order_and_duplicates_preserved() {
    let input = "hsa-miR-2\tB\nhsa-miR-1\tA\nhsa-miR-2\tB\n";
    let out = run(input, TargetDb::Mirdb, &GeneMap::new(), &CanonicalSet::new());
    assert_eq!(out, "hsa-miR-2\tb\nhsa-miR-1\ta\nhsa-miR-2\tb\n");
}

#[test]
fn malformed_line_aborts_by_default() {
    let mut out = Vec::new();
    let res = normalize_targets(
        "hsa-miR-1\tA\nbroken\n".as_bytes(),
        &mut out,
        TargetDb::Mirdb,
        &GeneMap::new(),
        &CanonicalSet::new(),
        NormalizeOptions::default(),
    );
    let err = res.unwrap_err();
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn malformed_line_skipped_on_request() {
    let mut out = Vec::new();
    let stats = normalize_targets(
        "hsa-miR-1\tA\nbroken\n\nhsa-miR-9\tB\n".as_bytes(),
        &mut out,
        TargetDb::Mirdb,
        &GeneMap::new(),
        &CanonicalSet::new(),
        NormalizeOptions {
            skip_malformed: true,
        },
    )
    .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "hsa-miR-1\ta\nhsa-miR-9\tb\n");
    assert_eq!(stats.lines, 4);
    assert_eq!(stats.malformed, 1);
    assert_eq!(stats.blank, 1);
    assert_eq!(stats.emitted, 2);
    assert_eq!(stats.rule_count(MatchRule::Fallback), 2);
}

#[test]
fn non_utf8_in_unused_column_is_emitted() {
    let input: &[u8] = b"MIRT000001,hsa-miR-20a-5p,Homo sapiens,HIF1A,3091,M\xfcller\nMIRT000002,hsa-miR-21-5p,Homo sapiens,PTEN,5728,Smith\n";
    let mut out = Vec::new();
    let stats = normalize_targets(
        input,
        &mut out,
        TargetDb::Mirtarbase,
        &GeneMap::new(),
        &CanonicalSet::new(),
        NormalizeOptions::default(),
    )
    .unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "hsa-miR-20a-5p\thif1a\nhsa-miR-21-5p\tpten\n"
    );
    assert_eq!(stats.emitted, 2);
}

struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn closed_output_is_reported_as_broken_pipe() {
    let err = normalize_targets(
        "hsa-miR-1\tA\n".as_bytes(),
        &mut ClosedPipe,
        TargetDb::Mirdb,
        &GeneMap::new(),
        &CanonicalSet::new(),
        NormalizeOptions::default(),
    )
    .unwrap_err();
    assert!(is_broken_pipe(&err));

    let other = normalize_targets(
        "broken\n".as_bytes(),
        &mut Vec::<u8>::new(),
        TargetDb::Mirdb,
        &GeneMap::new(),
        &CanonicalSet::new(),
        NormalizeOptions::default(),
    )
    .unwrap_err();
    assert!(!is_broken_pipe(&other));
}
