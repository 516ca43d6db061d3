use std::fmt;
use std::rc::Rc;

use ordered_float::OrderedFloat;
use renum_kind::Kind;

use crate::error;
use crate::sequence::Sequence;

use super::function::Function;

/// An element of a sequence.
///
/// Items are dynamically typed; a sequence may mix items of any kind.
#[derive(Debug, Clone)]
pub enum Item {
    /// The absent value. It is falsy.
    Nil,
    Boolean(bool),
    Integer(i64),
    /// A float. Floats are totally ordered, so `NaN` equals itself.
    Float(OrderedFloat<f64>),
    String(Rc<str>),
    /// A nested sequence.
    Array(Sequence),
    /// A callable value.
    Function(Function),
}

// a static assertion to ensure that Item never grows beyond four words
#[cfg(target_arch = "x86_64")]
static_assertions::const_assert!(std::mem::size_of::<Item>() <= 32);

impl Item {
    /// The runtime kind of the item.
    pub fn kind(&self) -> Kind {
        match self {
            Item::Nil => Kind::Nil,
            Item::Boolean(_) => Kind::Boolean,
            Item::Integer(_) => Kind::Integer,
            Item::Float(_) => Kind::Float,
            Item::String(_) => Kind::String,
            Item::Array(_) => Kind::Array,
            Item::Function(_) => Kind::Function,
        }
    }

    /// Instance-of test: true if the item's kind derives from `kind`.
    pub fn is_a(&self, kind: Kind) -> bool {
        self.kind().derives_from(kind)
    }

    /// Only `Nil` and `false` are falsy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Item::Nil | Item::Boolean(false))
    }

    /// True only for the boolean `true` itself, not for other truthy items.
    pub fn is_true(&self) -> bool {
        matches!(self, Item::Boolean(true))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Item::Nil)
    }

    pub fn to_integer(&self) -> error::Result<i64> {
        match self {
            Item::Integer(i) => Ok(*i),
            _ => Err(self.mismatch(Kind::Integer)),
        }
    }

    /// Get a numeric item as a float. Integers are widened.
    pub fn to_double(&self) -> error::Result<f64> {
        match self {
            Item::Integer(i) => Ok(*i as f64),
            Item::Float(f) => Ok(f.into_inner()),
            _ => Err(self.mismatch(Kind::Numeric)),
        }
    }

    pub fn to_str(&self) -> error::Result<&str> {
        match self {
            Item::String(s) => Ok(s),
            _ => Err(self.mismatch(Kind::String)),
        }
    }

    /// Call the item with a single argument.
    ///
    /// Fails with [`error::Error::InvalidArgument`] if the item is not
    /// callable.
    pub fn call(&self, argument: &Item) -> error::Result<Item> {
        match self {
            Item::Function(function) => function.call(argument),
            _ => Err(error::Error::InvalidArgument(format!(
                "{} ({}) is not callable",
                self,
                self.kind()
            ))),
        }
    }

    /// The text form of a scalar item.
    ///
    /// - `Nil` is the empty string.
    /// - Booleans and numbers use their literal notation.
    /// - Strings are returned unquoted.
    /// - Arrays and functions have no text form.
    pub fn string_value(&self) -> error::Result<String> {
        match self {
            Item::Nil => Ok(String::new()),
            Item::Boolean(b) => Ok(b.to_string()),
            Item::Integer(i) => Ok(i.to_string()),
            Item::Float(f) => Ok(float_representation(f.into_inner())),
            Item::String(s) => Ok(s.to_string()),
            Item::Array(_) | Item::Function(_) => Err(error::Error::InvalidArgument(format!(
                "{} has no text form",
                self.kind()
            ))),
        }
    }

    fn mismatch(&self, expected: Kind) -> error::Error {
        error::Error::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }
}

fn float_representation(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        if f > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if f != 0.0 && (f.abs() >= 1e16 || f.abs() < 1e-4) {
        exponent_representation(f)
    } else if f.fract() == 0.0 {
        format!("{:.1}", f)
    } else {
        f.to_string()
    }
}

// 1.0e+16, 2.5e-07: the mantissa always has a fraction and the exponent a
// sign and at least two digits
fn exponent_representation(f: f64) -> String {
    let text = format!("{:e}", f);
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    let fraction = if mantissa.contains('.') { "" } else { ".0" };
    format!("{}{}e{}{:0>2}", mantissa, fraction, sign, digits)
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Item::Nil, Item::Nil) => true,
            (Item::Boolean(a), Item::Boolean(b)) => a == b,
            (Item::Integer(a), Item::Integer(b)) => a == b,
            (Item::Float(a), Item::Float(b)) => a == b,
            // numeric equality crosses the integer/float divide
            (Item::Integer(i), Item::Float(f)) | (Item::Float(f), Item::Integer(i)) => {
                OrderedFloat(*i as f64) == *f
            }
            (Item::String(a), Item::String(b)) => a == b,
            (Item::Array(a), Item::Array(b)) => a == b,
            (Item::Function(a), Item::Function(b)) => a == b,
            _ => false,
        }
    }
}

/// Inspect notation: strings are quoted, `Nil` is `nil`, arrays are
/// bracketed.
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Nil => f.write_str("nil"),
            Item::Boolean(b) => write!(f, "{}", b),
            Item::Integer(i) => write!(f, "{}", i),
            Item::Float(v) => f.write_str(&float_representation(v.into_inner())),
            Item::String(s) => write!(f, "{:?}", s),
            Item::Array(sequence) => write!(f, "{}", sequence),
            Item::Function(function) => write!(f, "{}", function),
        }
    }
}

impl From<bool> for Item {
    fn from(b: bool) -> Self {
        Item::Boolean(b)
    }
}

impl From<i64> for Item {
    fn from(i: i64) -> Self {
        Item::Integer(i)
    }
}

impl From<i32> for Item {
    fn from(i: i32) -> Self {
        Item::Integer(i.into())
    }
}

impl From<f64> for Item {
    fn from(f: f64) -> Self {
        Item::Float(OrderedFloat(f))
    }
}

impl From<&str> for Item {
    fn from(s: &str) -> Self {
        Item::String(s.into())
    }
}

impl From<String> for Item {
    fn from(s: String) -> Self {
        Item::String(s.into())
    }
}

impl From<Sequence> for Item {
    fn from(sequence: Sequence) -> Self {
        Item::Array(sequence)
    }
}

impl From<Vec<Item>> for Item {
    fn from(items: Vec<Item>) -> Self {
        Item::Array(items.into())
    }
}

impl From<Function> for Item {
    fn from(function: Function) -> Self {
        Item::Function(function)
    }
}

impl<T> From<Option<T>> for Item
where
    T: Into<Item>,
{
    fn from(option: Option<T>) -> Self {
        option.map_or(Item::Nil, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence;

    #[test]
    fn test_truthiness() {
        assert!(!Item::Nil.is_truthy());
        assert!(!Item::from(false).is_truthy());
        assert!(Item::from(true).is_truthy());
        assert!(Item::from(0).is_truthy());
        assert!(Item::from("").is_truthy());
        assert!(Item::from(sequence![]).is_truthy());
    }

    #[test]
    fn test_is_true_is_exact() {
        assert!(Item::from(true).is_true());
        assert!(!Item::from(1).is_true());
        assert!(!Item::from("true").is_true());
    }

    #[test]
    fn test_is_a() {
        assert!(Item::from(1).is_a(Kind::Integer));
        assert!(Item::from(1).is_a(Kind::Numeric));
        assert!(Item::from(1.5).is_a(Kind::Numeric));
        assert!(Item::from("s").is_a(Kind::Object));
        assert!(!Item::from("s").is_a(Kind::Numeric));
        assert!(!Item::Nil.is_a(Kind::Integer));
    }

    #[test]
    fn test_numeric_equality() {
        assert_eq!(Item::from(1), Item::from(1.0));
        assert_ne!(Item::from(1), Item::from(1.5));
        assert_ne!(Item::from(1), Item::from("1"));
        assert_eq!(Item::from(f64::NAN), Item::from(f64::NAN));
    }

    #[test]
    fn test_array_equality() {
        assert_eq!(Item::from(sequence![1, "a"]), Item::from(sequence![1, "a"]));
        assert_ne!(Item::from(sequence![1, "a"]), Item::from(sequence![1]));
    }

    #[test]
    fn test_string_value() {
        assert_eq!(Item::Nil.string_value().unwrap(), "");
        assert_eq!(Item::from(2.0).string_value().unwrap(), "2.0");
        assert_eq!(Item::from(0.25).string_value().unwrap(), "0.25");
        assert_eq!(Item::from(0.0).string_value().unwrap(), "0.0");
        assert_eq!(Item::from(123456.0).string_value().unwrap(), "123456.0");
        assert_eq!(Item::from(0.0001).string_value().unwrap(), "0.0001");
        assert_eq!(Item::from("ant").string_value().unwrap(), "ant");
        assert!(matches!(
            Item::from(sequence![1]).string_value(),
            Err(error::Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_float_exponent_form() {
        assert_eq!(Item::from(1e16).string_value().unwrap(), "1.0e+16");
        assert_eq!(Item::from(1e-7).string_value().unwrap(), "1.0e-07");
        assert_eq!(Item::from(-2.5e20).string_value().unwrap(), "-2.5e+20");
        assert_eq!(Item::from(1.5e-5).to_string(), "1.5e-05");
        assert_eq!(Item::from(1e100).to_string(), "1.0e+100");
        // a whole float never reads like an integer
        assert_ne!(
            Item::from(1e16).string_value(),
            Item::from(10_000_000_000_000_000_i64).string_value()
        );
    }

    #[test]
    fn test_to_double_widens_integers() {
        assert_eq!(Item::from(2).to_double(), Ok(2.0));
        assert_eq!(Item::from(0.5).to_double(), Ok(0.5));
        assert_eq!(
            Item::from("2").to_double(),
            Err(error::Error::TypeMismatch {
                expected: Kind::Numeric,
                found: Kind::String
            })
        );
    }

    #[test]
    fn test_accessor_mismatch() {
        assert_eq!(
            Item::from("a").to_integer(),
            Err(error::Error::TypeMismatch {
                expected: Kind::Integer,
                found: Kind::String
            })
        );
    }

    #[test]
    fn test_call_non_callable() {
        assert!(matches!(
            Item::from(3).call(&Item::from(1)),
            Err(error::Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_display() {
        let item = Item::from(sequence![1, "hi", Item::Nil, true, 2.0, sequence![]]);
        insta::assert_snapshot!(item.to_string(), @r#"[1, "hi", nil, true, 2.0, []]"#);
    }
}
