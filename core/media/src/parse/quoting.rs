use quoted_string::error::CoreError;
use quoted_string::spec::{GeneralQSSpec, ParsingImpl, PartialCodePoint, State};
use quoted_string::spec::{QuotingClass, QuotingClassifier, WithoutQuotingValidator};

use crate::parse::checkers::{is_valid_token, is_valid_value_char};

/// Quoted-string rules for parameter values: any ASCII character other than
/// a control character (tab excepted) may appear, escaped or not.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct ValueSpec;

impl GeneralQSSpec for ValueSpec {
    type Quoting = ValueQuoting;
    type Parsing = ValueParsing;
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct ValueQuoting;

impl QuotingClassifier for ValueQuoting {
    fn classify_for_quoting(pcp: PartialCodePoint) -> QuotingClass {
        match pcp.as_u8() as char {
            '"' | '\\' => QuotingClass::NeedsQuoting,
            c if is_valid_value_char(&c) => QuotingClass::QText,
            _ => QuotingClass::Invalid,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct ValueParsing;

impl ParsingImpl for ValueParsing {
    fn can_be_quoted(bch: PartialCodePoint) -> bool {
        is_valid_value_char(&(bch.as_u8() as char))
    }

    fn handle_normal_state(bch: PartialCodePoint) -> Result<(State<Self>, bool), CoreError> {
        if is_valid_value_char(&(bch.as_u8() as char)) {
            Ok((State::Normal, true))
        } else {
            Err(CoreError::InvalidChar)
        }
    }
}

/// Accepts values that render without quotes: non-empty tokens.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct TokenValidator {
    count: usize
}

impl WithoutQuotingValidator for TokenValidator {
    fn next(&mut self, pcp: PartialCodePoint) -> bool {
        let valid = is_valid_token(&(pcp.as_u8() as char));
        if valid {
            self.count += 1;
        }

        valid
    }

    fn end(&self) -> bool {
        self.count > 0
    }
}
