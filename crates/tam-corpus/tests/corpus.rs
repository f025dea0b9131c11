//! Integration tests for tam-corpus: manifest -> reader -> sentences.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::PathBuf};

use tam_corpus::{CorpusError, Dialect, PartOfSpeech, Sentence, read_manifest};

/// Writes `content` under `dir` and returns the path.
fn write(dir: &tempfile::TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn manifest_drives_all_three_dialects() {
    let dir = tempfile::tempdir().unwrap();
    write(
        &dir,
        "itwac.txt",
        b"<text>\n<s>\nla\tART\til\nvera\tADJ\tvero\n</s>\n<s>\nqui\tADV\tqui\n</s>\n</text>\n",
    );
    write(
        &dir,
        "rep.txt",
        b"<s id=\"1\">\n1\tIl\til\t_\tRD\t_\t2\tdet\n2\tsole\tsole\t_\tS\t_\t0\tROOT\n</s>\n",
    );
    write(
        &dir,
        "wiki.conll",
        b"<doc id=\"1\">\n1\tun\tuno\tRI\n2\tmolto\tmolto\tB\t_\t_\t3\tadvmod\n3\tbel\tbello\tA\n</doc>\n",
    );
    let manifest = write(
        &dir,
        "files.tsv",
        b"ITWAC\t01\titwac.txt\nREPUBBLICA\t02\trep.txt\nWIKICONLL\t03\twiki.conll\n",
    );

    let files = read_manifest(&manifest).unwrap();
    assert_eq!(
        files.iter().map(|f| f.dialect).collect::<Vec<_>>(),
        Dialect::ALL.to_vec()
    );

    let read = |i: usize| -> Vec<Sentence> {
        files[i].open().unwrap().map(Result::unwrap).collect()
    };

    let itwac = read(0);
    assert_eq!(itwac.len(), 2);
    assert_eq!(itwac[0].tokens()[0].pos, PartOfSpeech::Det);
    assert_eq!(itwac[1].tokens()[0].index, 1);

    let rep = read(1);
    assert_eq!(rep.len(), 1);
    assert_eq!(rep[0].token_by_index(1).unwrap().head, Some(2));

    let wiki = read(2);
    assert_eq!(wiki.len(), 1);
    assert_eq!(wiki[0].source(), "WIKICONLL");
    assert_eq!(wiki[0].tokens()[1].deprel, "advmod");
    assert!(wiki[0].tokens()[0].has_unknown_relation());
}

#[test]
fn missing_manifest_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_manifest(&dir.path().join("absent.tsv")).unwrap_err();
    assert!(matches!(err, CorpusError::ReadFile { .. }));
}
