//! Built-in hooks: `print`, `println` and `throw`.

use theatre_value::{evaluate_binary, BinaryOp, Value};

use crate::error::{VmError, VmResult};
use crate::hook::{Arity, HookContext, HookTable};

/// Register the standard hooks into `table`.
pub fn register_builtins(table: &mut HookTable) {
    table.register("print", Arity::Variadic, print);
    table.register("println", Arity::Variadic, println);
    table.register("throw", Arity::Variadic, throw);
}

fn print(ctx: HookContext<'_>) -> VmResult<Value> {
    ctx.out.write_str(&render(ctx.args));
    Ok(Value::Empty)
}

fn println(ctx: HookContext<'_>) -> VmResult<Value> {
    ctx.out.write_line(&render(ctx.args));
    Ok(Value::Empty)
}

/// Concatenate the arguments with `+` and raise the result.
///
/// If the arguments cannot be added together, the message falls back to
/// `Error: ` followed by their space-separated display forms.
fn throw(ctx: HookContext<'_>) -> VmResult<Value> {
    let message = ctx
        .args
        .iter()
        .try_fold(Value::Empty, |acc, arg| {
            evaluate_binary(&acc, arg, BinaryOp::Add)
        })
        .map_or_else(
            |_| {
                let parts: Vec<String> = ctx.args.iter().map(ToString::to_string).collect();
                format!("Error: {}", parts.join(" "))
            },
            |joined| joined.to_string(),
        );
    Err(VmError::Thrown { message })
}

/// One argument prints as-is; with more, the first is a format template.
fn render(args: &[Value]) -> String {
    match args {
        [] => String::new(),
        [single] => single.to_string(),
        [template, rest @ ..] => format_template(&template.to_string(), rest),
    }
}

/// Substitute positional arguments into `template`.
///
/// Each `{` consumes the next argument's display form; once arguments run
/// out, `{` is kept literally. Every `}` is dropped.
pub fn format_template(template: &str, args: &[Value]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    for ch in template.chars() {
        match ch {
            '{' => match args.next() {
                Some(arg) => out.push_str(&arg.to_string()),
                None => out.push('{'),
            },
            '}' => {}
            other => out.push(other),
        }
    }
    out
}
