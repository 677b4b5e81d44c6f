//! Cross-kind rank table.
//!
//! Values of different kinds order by rank alone:
//!
//! ```text
//! absent < null < boolean < number < string < var < ref < array < object
//!   < set < array comprehension < object comprehension < set comprehension
//!   < call < args < expr < some < every < with < head < body < rule
//!   < import < package < annotations < module
//! ```

use crate::term::Value;

/// Position of a value kind in the cross-kind order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(pub u16);

impl Rank {
    /// Rank of an absent term, below every value.
    pub const ABSENT: Rank = Rank(0);
}

/// Returns the rank of a value's kind.
#[must_use]
pub const fn rank(value: &Value) -> Rank {
    Rank(match value {
        Value::Null => 1,
        Value::Boolean(_) => 2,
        Value::Number(_) => 3,
        Value::String(_) => 4,
        Value::Var(_) => 5,
        Value::Ref(_) => 6,
        Value::Array(_) => 7,
        Value::Object(_) => 8,
        Value::Set(_) => 9,
        Value::ArrayComprehension(_) => 10,
        Value::ObjectComprehension(_) => 11,
        Value::SetComprehension(_) => 12,
        Value::Call(_) => 13,
        Value::Args(_) => 14,
        Value::Expr(_) => 100,
        Value::SomeDecl(_) => 101,
        Value::Every(_) => 102,
        Value::With(_) => 110,
        Value::Head(_) => 120,
        Value::Body(_) => 200,
        Value::Rule(_) => 1000,
        Value::Import(_) => 1001,
        Value::Package(_) => 1002,
        Value::Annotations(_) => 1003,
        Value::Module(_) => 10000,
    })
}

/// Returns the rank of a possibly absent value.
#[must_use]
pub const fn rank_of(value: Option<&Value>) -> Rank {
    match value {
        Some(value) => rank(value),
        None => Rank::ABSENT,
    }
}
