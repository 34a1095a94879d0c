/*!
 * Tests for run scanning over whole documents
 */

use tagsplice::classifier::{Classifier, MarkerRule};
use tagsplice::identifier::IdentifierAllocator;
use tagsplice::scanner::RunScanner;
use crate::common;

/// Test that the sample script produces the expected skeleton and manifest
#[test]
fn test_scan_document_withSampleScript_shouldProduceSkeletonAndManifest() {
    let extraction = RunScanner::default().scan_document(common::SAMPLE_SCRIPT);

    assert_eq!(extraction.skeleton, common::SAMPLE_SKELETON);
    assert_eq!(extraction.manifest, common::SAMPLE_MANIFEST);
    assert_eq!(extraction.runs.len(), 3);
    assert_eq!(extraction.dangling().count(), 0);
}

/// Test that identifiers increase by one across all lines of a document
#[test]
fn test_scan_document_withManyLines_shouldNumberWithoutGaps() {
    let mut source = String::new();
    for i in 0..50 {
        match i % 3 {
            0 => source.push_str("x = 'é' + 'ü'\n"),
            1 => source.push_str("plain line\n"),
            _ => source.push_str("y = \"ß\"\n"),
        }
    }

    let extraction = RunScanner::default().scan_document(&source);
    let indices: Vec<u64> = extraction.runs.iter().map(|run| run.id.index()).collect();
    let expected: Vec<u64> = (0..indices.len() as u64).collect();

    assert_eq!(indices, expected);
    assert_eq!(indices.len(), 17 * 2 + 16);
}

/// Test that a fresh document starts numbering at zero again
#[test]
fn test_scan_document_calledTwice_shouldRestartNumbering() {
    let scanner = RunScanner::default();
    let first = scanner.scan_document("é\n");
    let second = scanner.scan_document("ü\n");

    assert_eq!(first.skeleton, "<EXTRACTED0>\n");
    assert_eq!(second.skeleton, "<EXTRACTED0>\n");
}

/// Test that a shared allocator keeps counting across calls to scan_line
#[test]
fn test_scan_line_withSharedAllocator_shouldContinueNumbering() {
    let scanner = RunScanner::default();
    let mut allocator = IdentifierAllocator::new();

    let first = scanner.scan_line("a é b\n", &mut allocator);
    let second = scanner.scan_line("c ü d\n", &mut allocator);

    assert_eq!(first.tagged, "a <EXTRACTED0>b\n");
    assert_eq!(second.tagged, "c <EXTRACTED1>d\n");
    assert_eq!(allocator.issued(), 2);
}

/// Test that two runs on one line are written as one block
#[test]
fn test_scan_document_withTwoRunsOnOneLine_shouldWriteTwoEntryBlock() {
    let extraction = RunScanner::default().scan_document("t(\"ｆｏｏ\", \"ｂａｒ\")\n");

    assert_eq!(extraction.manifest, "<EXTRACTED0>ｆｏｏ\n<EXTRACTED1>ｂａｒ\n");
    assert_eq!(extraction.skeleton, "t(\"<EXTRACTED0>\", \"<EXTRACTED1>\")\n");
}

/// Test that a run at the very end of a file without newline is dangling
#[test]
fn test_scan_document_withRunAtEof_shouldKeepItOutOfSkeleton() {
    let extraction = RunScanner::default().scan_document("a = 1\nb = ñandú");

    assert_eq!(extraction.skeleton, "a = 1\nb = <EXTRACTED0>and");
    assert_eq!(extraction.manifest, "<EXTRACTED0>ñ\n<EXTRACTED1>ú\n");
    let dangling: Vec<u64> = extraction.dangling().map(|run| run.id.index()).collect();
    assert_eq!(dangling, vec![1]);
}

/// Test the behaviour when a different marker rule is configured
#[test]
fn test_scan_document_withNonAsciiRule_shouldIgnoreControlCharacters() {
    let source = "a\u{7f}b é\n";
    let escaped = RunScanner::default().scan_document(source);
    let non_ascii = RunScanner::new(Classifier::new(MarkerRule::NonAscii, " .,?!-")).scan_document(source);

    assert_eq!(escaped.skeleton, "a<EXTRACTED0>b <EXTRACTED1>\n");
    assert_eq!(non_ascii.skeleton, "a\u{7f}b <EXTRACTED0>\n");
}

/// Test that punctuation alone never starts a run
#[test]
fn test_scan_document_withOnlyConnectors_shouldProduceEmptyManifest() {
    let extraction = RunScanner::default().scan_document("... !!! ---\n, , ,\n");

    assert_eq!(extraction.skeleton, "... !!! ---\n, , ,\n");
    assert!(extraction.manifest.is_empty());
}
