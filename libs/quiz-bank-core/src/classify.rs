//! Question type classification.

use crate::dialect::Dialect;
use crate::options::OptionBlock;
use crate::types::{ChoiceOption, QuestionKind, RankedOption};

/// Decide the question type from its text and collected options.
///
/// Rules apply in order:
/// 1. matching keyword and matching pairs
/// 2. ranking keyword and at least one explicit rank
/// 3. no correct option: fill in the blank, every option becomes correct
/// 4. otherwise multiple choice
///
/// Returns `None` for an empty block; such questions are dropped.
pub fn classify(text: &str, block: OptionBlock, dialect: &Dialect) -> Option<QuestionKind> {
    if block.is_empty() {
        return None;
    }

    let choices = match block {
        OptionBlock::Matching(options) if dialect.mentions_matching(text) => {
            return Some(QuestionKind::Matching { options });
        }
        OptionBlock::Ranking(options)
            if dialect.mentions_ranking(text) && options.iter().any(|o| o.rank.is_some()) =>
        {
            return Some(QuestionKind::Ranking { options });
        }
        OptionBlock::Plain(options) => options,
        OptionBlock::Ranking(options) => options.into_iter().map(unranked).collect(),
        // Pairs only come out of matching mode, which needs the keyword.
        OptionBlock::Matching(_) => return None,
    };

    Some(classify_choices(choices))
}

fn unranked(option: RankedOption) -> ChoiceOption {
    ChoiceOption::new(option.text, option.is_correct)
}

fn classify_choices(mut options: Vec<ChoiceOption>) -> QuestionKind {
    if options.iter().any(|o| o.is_correct) {
        QuestionKind::MultipleChoice { options }
    } else {
        for option in &mut options {
            option.is_correct = true;
        }
        QuestionKind::FillInTheBlank { options }
    }
}
