use crate::command::value::Value;
use crate::few::few;
use crate::literal::literal;
use crate::map::MapExt;
use crate::optional::{Optional, optional};
use crate::parser::{BoxedParser, Parser};
use crate::text::chars::{gap, skip};
use crate::verbatim::verbatim;
use std::borrow::Cow;

/// A dash directly followed by `name`, e.g. `-user`
pub fn flag(name: impl Into<Cow<'static, str>>) -> impl Parser<Output = String> {
    verbatim(few(("-", literal(name)))).map("flag", |_, (_, name)| Ok(name))
}

/// A named argument: the flag for `name`, whitespace, then a value for `kind`
///
/// Yields only the value.
pub fn positional<P>(
    name: impl Into<Cow<'static, str>>,
    kind: P,
) -> impl Parser<Output = P::Output>
where
    P: Parser,
{
    let name = name.into();
    let tag = format!("-{}", name);
    few((skip(), flag(name), gap(), kind)).map(tag, |_, (_, _, _, value)| Ok(value))
}

/// A named argument ready to be scheduled by a command
pub struct Argument {
    name: String,
    required: bool,
    parser: BoxedParser<Value>,
}

impl Argument {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn parser(&self) -> &BoxedParser<Value> {
        &self.parser
    }
}

/// Marker for arguments that must be present
pub struct Required;

/// Marker for arguments declared through [`optional`]
pub struct Omittable;

/// Conversion of a value parser into a named command argument
///
/// A plain parser becomes a required positional. An `optional(p)` is taken
/// apart so the command schedules `optional(positional(name, p))` instead of a
/// positional whose value may be missing; an absent argument is
/// [`Value::Null`]. The marker keeps the two impls apart.
pub trait IntoArgument<Marker> {
    fn into_argument(self, name: &str) -> Argument;
}

impl<P> IntoArgument<Required> for P
where
    P: Parser + Send + Sync + 'static,
    P::Output: Into<Value>,
{
    fn into_argument(self, name: &str) -> Argument {
        let parser = positional(name.to_string(), self)
            .map("argument", |_, value| Ok(Into::<Value>::into(value)))
            .boxed();
        Argument {
            name: name.to_string(),
            required: true,
            parser,
        }
    }
}

impl<P> IntoArgument<Omittable> for Optional<P>
where
    P: Parser + Send + Sync + 'static,
    P::Output: Into<Value>,
{
    fn into_argument(self, name: &str) -> Argument {
        let parser = optional(positional(name.to_string(), self.into_inner()))
            .map("optional argument", |_, value| {
                Ok(value.map_or(Value::Null, Into::into))
            })
            .boxed();
        Argument {
            name: name.to_string(),
            required: false,
            parser,
        }
    }
}
