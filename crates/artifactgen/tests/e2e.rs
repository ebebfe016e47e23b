//! End-to-end tests for report assembly.
//!
//! This module provides a data-driven test framework where adding a test
//! case is a matter of adding an entry to the `TEST_CASES` array describing
//! the step layout and the expected document shape.

mod common;

use artifactgen::prefs::CategoryPrefix;
use common::{MetadataBuilder, RegistryBuilder, TestHarness};

/// One image slot recorded against a step.
#[derive(Clone, Copy)]
enum Slot {
    /// A decodable image of the given pixel dimensions.
    Image(u32, u32),
    /// A recorded path whose file never existed.
    Missing,
}

/// A step and its capture slots, in capture order.
struct StepSpec {
    step: u32,
    slots: &'static [Slot],
    wants_two_images: bool,
}

/// Represents a single end-to-end assembly case.
struct TestCase {
    /// Unique name for the test case
    name: &'static str,
    /// Steps to record before assembling
    steps: &'static [StepSpec],
    /// Category prefix to assemble with
    prefix: CategoryPrefix,
    /// Expected filename prefix code
    expected_prefix: &'static str,
    /// Expected number of embedded media parts
    expected_media: usize,
    /// Expected number of explicit page breaks in the document
    expected_breaks: usize,
    /// Expected step headings, in document order
    expected_headings: &'static [&'static str],
}

/// All assembly cases to run. Break accounting: one break follows the
/// header table, one closes each step, and within a step a break precedes
/// every third, fifth, ... capture slot whether or not its image decoded.
const TEST_CASES: &[TestCase] = &[
    TestCase {
        name: "single_step_single_image",
        steps: &[StepSpec {
            step: 1,
            slots: &[Slot::Image(40, 20)],
            wants_two_images: false,
        }],
        prefix: CategoryPrefix::Smoke,
        expected_prefix: "SMK",
        expected_media: 1,
        expected_breaks: 2,
        expected_headings: &["Step 1"],
    },
    TestCase {
        name: "three_images_break_before_third",
        steps: &[StepSpec {
            step: 1,
            slots: &[Slot::Image(40, 20), Slot::Image(40, 20), Slot::Image(40, 20)],
            wants_two_images: false,
        }],
        prefix: CategoryPrefix::Sanity,
        expected_prefix: "SAN",
        expected_media: 3,
        expected_breaks: 3,
        expected_headings: &["Step 1"],
    },
    TestCase {
        name: "five_images_break_before_third_and_fifth",
        steps: &[StepSpec {
            step: 1,
            slots: &[
                Slot::Image(40, 20),
                Slot::Image(40, 20),
                Slot::Image(40, 20),
                Slot::Image(40, 20),
                Slot::Image(40, 20),
            ],
            wants_two_images: false,
        }],
        prefix: CategoryPrefix::Regression,
        expected_prefix: "REG",
        expected_media: 5,
        expected_breaks: 4,
        expected_headings: &["Step 1"],
    },
    TestCase {
        name: "two_steps_one_image_each",
        steps: &[
            StepSpec {
                step: 1,
                slots: &[Slot::Image(40, 20)],
                wants_two_images: false,
            },
            StepSpec {
                step: 2,
                slots: &[Slot::Image(40, 20)],
                wants_two_images: true,
            },
        ],
        prefix: CategoryPrefix::Uat,
        expected_prefix: "UAT",
        expected_media: 2,
        expected_breaks: 3,
        expected_headings: &["Step 1", "Step 2"],
    },
    TestCase {
        name: "missing_slot_still_counts_for_pagination",
        steps: &[StepSpec {
            step: 1,
            slots: &[Slot::Image(40, 20), Slot::Missing, Slot::Image(40, 20)],
            wants_two_images: false,
        }],
        prefix: CategoryPrefix::Smoke,
        expected_prefix: "SMK",
        expected_media: 2,
        expected_breaks: 3,
        expected_headings: &["Step 1"],
    },
    TestCase {
        name: "step_without_captures_keeps_heading",
        steps: &[
            StepSpec {
                step: 1,
                slots: &[Slot::Image(40, 20)],
                wants_two_images: false,
            },
            StepSpec {
                step: 2,
                slots: &[],
                wants_two_images: false,
            },
            StepSpec {
                step: 3,
                slots: &[Slot::Image(40, 20)],
                wants_two_images: false,
            },
        ],
        prefix: CategoryPrefix::Smoke,
        expected_prefix: "SMK",
        expected_media: 2,
        expected_breaks: 4,
        expected_headings: &["Step 1", "Step 2", "Step 3"],
    },
];

fn run_case(case: &TestCase) {
    let harness = TestHarness::new();

    let mut builder = RegistryBuilder::new(&harness.fixtures_dir);
    for spec in case.steps {
        builder = builder.two_images(spec.step, spec.wants_two_images);
        for slot in spec.slots {
            builder = match slot {
                Slot::Image(w, h) => builder.capture(spec.step, *w, *h),
                Slot::Missing => builder.missing_capture(spec.step),
            };
        }
    }
    let registry = builder.build();
    let metadata = MetadataBuilder::new().build();

    let report = harness
        .assembler()
        .assemble(&metadata, &registry, case.prefix)
        .unwrap_or_else(|e| panic!("case {}: assembly failed: {}", case.name, e));

    let file_name = report.path.file_name().unwrap().to_str().unwrap();
    assert!(
        file_name.starts_with(&format!("{}_", case.expected_prefix)),
        "case {}: unexpected file name {}",
        case.name,
        file_name
    );

    assert_eq!(
        harness.media_count(&report),
        case.expected_media,
        "case {}: media count",
        case.name
    );

    let xml = harness.document_xml(&report);
    assert_eq!(
        xml.matches(r#"<w:br w:type="page"/>"#).count(),
        case.expected_breaks,
        "case {}: page break count",
        case.name
    );

    let mut last_position = 0;
    for heading in case.expected_headings {
        let needle = format!(">{}</w:t>", heading);
        let position = xml[last_position..]
            .find(&needle)
            .unwrap_or_else(|| panic!("case {}: heading {} out of order", case.name, heading));
        last_position += position + needle.len();
    }

    assert!(
        xml.contains(&format!(">{}</w:t>", metadata.test_case_id)),
        "case {}: header table missing id",
        case.name
    );
}

#[test]
fn test_assembly_cases() {
    for case in TEST_CASES {
        run_case(case);
    }
}
