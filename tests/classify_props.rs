//! Property tests for line classification.

use proptest::prelude::*;
use unicode_normalization::UnicodeNormalization;
use vanban::layout::{body_lines, classify, Role};

const VIETNAMESE: &str = "[a-zA-Z0-9 .,;:()đĐàáảãạăắằẳẵặâấầẩẫậèéẻẽẹêếềểễệìíỉĩịòóỏõọôốồổỗộơớờởỡợùúủũụưứừửữựỳýỷỹỵÀÁẢÃẠĂẮẰẲẴẶÂẤẦẨẪẬÈÉẺẼẸÊẾỀỂỄỆÌÍỈĨỊÒÓỎÕỌÔỐỒỔỖỘƠỚỜỞỠỢÙÚỦŨỤƯỨỪỬỮỰỲÝỶỸỴ]{0,60}";

proptest! {
    #[test]
    fn classification_is_total(line in any::<String>()) {
        let role = classify(&line);
        prop_assert!(Role::ALL.contains(&role));
    }

    #[test]
    fn surrounding_whitespace_is_ignored(line in VIETNAMESE) {
        let padded = format!(" \t{line}  ");
        prop_assert_eq!(classify(&padded), classify(&line));
    }

    #[test]
    fn decomposed_input_classifies_the_same(line in VIETNAMESE) {
        let decomposed: String = line.nfd().collect();
        prop_assert_eq!(classify(&decomposed), classify(&line));
    }

    #[test]
    fn articles(n in 1u32..500, rest in "[a-zđ ]{0,40}") {
        let line = format!("Điều {n}. Quy định{rest}");
        prop_assert_eq!(classify(&line), Role::Article);
    }

    #[test]
    fn clauses(n in 1u32..100, rest in "[a-zđơư][a-zđơư ]{0,40}") {
        let line = format!("{n}. {rest}");
        prop_assert_eq!(classify(&line), Role::Clause);
    }

    #[test]
    fn points(letter in "[a-hđ]", rest in "[a-z][a-z ]{0,40}") {
        let line = format!("{letter}) {rest}");
        prop_assert_eq!(classify(&line), Role::Point);
    }

    #[test]
    fn short_uppercase_lines_are_headings(line in "[A-ZĐƯƠÂÊÔ][A-ZĐƯƠÂÊÔ ]{0,60}") {
        prop_assert_eq!(classify(&line), Role::SectionHeading);
    }

    #[test]
    fn body_lines_cover_every_line(lines in prop::collection::vec("[a-z ]{0,20}", 1..10)) {
        let text = lines.join("\n");
        prop_assert_eq!(body_lines(&text).count(), lines.len());
    }
}
