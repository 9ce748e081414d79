use crate::error::{CasError, Result};
use crate::expr::{Expr, Rational};
use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::take_while;
use nom::character::complete::{char, digit1, multispace0, satisfy};
use nom::combinator::{all_consuming, map_res, opt, recognize};
use nom::error::{VerboseError, VerboseErrorKind};
use nom::multi::{fold_many0, separated_list1};
use nom::sequence::{delimited, pair, preceded};
use num_bigint::{BigInt, ParseBigIntError};
use num_traits::{Num, pow};

type ParseResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// Parse an expression such as `1/2*rhoA*diff(w(x, t), t)^2 - E*x`.
pub fn parse_expr(input: &str) -> Result<Expr> {
    match all_consuming(ws(parse_add_sub))(input) {
        Ok((_, expr)) => Ok(expr),
        Err(e) => Err(CasError::Parse(format!("{e:?}"))),
    }
}

fn parse_add_sub(input: &str) -> ParseResult<'_, Expr> {
    let (rest, init) = parse_mul_div(input)?;
    fold_many0(
        pair(ws(alt((char('+'), char('-')))), parse_mul_div),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '+' => Expr::Add(acc.boxed(), rhs.boxed()),
            _ => Expr::Sub(acc.boxed(), rhs.boxed()),
        },
    )(rest)
}

fn parse_mul_div(input: &str) -> ParseResult<'_, Expr> {
    let (rest, init) = parse_pow(input)?;
    fold_many0(
        pair(ws(alt((char('*'), char('/')))), parse_pow),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '*' => Expr::Mul(acc.boxed(), rhs.boxed()),
            _ => Expr::Div(acc.boxed(), rhs.boxed()),
        },
    )(rest)
}

fn parse_pow(input: &str) -> ParseResult<'_, Expr> {
    let (rest, base) = parse_unary(input)?;
    if let Ok((next, exp)) = preceded(ws(char('^')), parse_pow)(rest) {
        Ok((next, Expr::Pow(base.boxed(), exp.boxed())))
    } else {
        Ok((rest, base))
    }
}

fn parse_unary(input: &str) -> ParseResult<'_, Expr> {
    if let Ok((rest, expr)) = preceded(ws(char('-')), parse_pow)(input) {
        Ok((rest, Expr::Neg(expr.boxed())))
    } else {
        parse_primary(input)
    }
}

fn parse_primary(input: &str) -> ParseResult<'_, Expr> {
    alt((
        parse_parens,
        parse_number,
        parse_evaluated_derivative,
        parse_call_or_identifier,
    ))(input)
}

fn parse_parens(input: &str) -> ParseResult<'_, Expr> {
    delimited(ws(char('(')), parse_add_sub, ws(char(')')))(input)
}

/// Integers and decimals, both read as exact rationals.
fn parse_number(input: &str) -> ParseResult<'_, Expr> {
    map_res(
        ws(recognize(pair(digit1, opt(pair(char('.'), digit1))))),
        |s: &str| -> std::result::Result<Expr, ParseBigIntError> {
            match s.split_once('.') {
                None => Ok(Expr::Constant(Rational::from_integer(BigInt::from_str_radix(s, 10)?))),
                Some((whole, frac)) => {
                    let digits = BigInt::from_str_radix(&format!("{whole}{frac}"), 10)?;
                    let scale = pow(BigInt::from(10), frac.len());
                    Ok(Expr::Constant(Rational::new(digits, scale)))
                }
            }
        },
    )(input)
}

fn parse_identifier(input: &str) -> ParseResult<'_, &str> {
    ws(recognize(pair(
        satisfy(|c: char| c.is_ascii_alphabetic()),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
    )))(input)
}

fn parse_call_or_identifier(input: &str) -> ParseResult<'_, Expr> {
    let (rest, name) = parse_identifier(input)?;
    let (rest, args) = opt(delimited(
        ws(char('(')),
        separated_list1(ws(char(',')), parse_add_sub),
        ws(char(')')),
    ))(rest)?;
    let Some(args) = args else {
        return Ok((rest, Expr::Variable(name.to_string())));
    };
    match build_call(name, args) {
        Ok(expr) => Ok((rest, expr)),
        Err(context) => Err(nom::Err::Failure(VerboseError {
            errors: vec![(input, VerboseErrorKind::Context(context))],
        })),
    }
}

/// Slot-order form `w^(1,0)(0, t)`, used for derivatives whose slots hold non-symbols.
fn parse_evaluated_derivative(input: &str) -> ParseResult<'_, Expr> {
    let (rest, name) = parse_identifier(input)?;
    let (rest, orders) = preceded(
        ws(char('^')),
        delimited(
            ws(char('(')),
            separated_list1(ws(char(',')), ws(map_res(digit1, str::parse::<u32>))),
            ws(char(')')),
        ),
    )(rest)?;
    let (rest, args) = delimited(
        ws(char('(')),
        separated_list1(ws(char(',')), parse_add_sub),
        ws(char(')')),
    )(rest)?;
    let context = if matches!(name, "sin" | "cos" | "exp" | "log" | "diff") {
        "slot orders apply only to undefined functions"
    } else if orders.len() != args.len() {
        "one derivative order per argument"
    } else {
        return Ok((
            rest,
            Expr::Function {
                name: name.to_string(),
                args,
                orders,
            },
        ));
    };
    Err(nom::Err::Failure(VerboseError {
        errors: vec![(input, VerboseErrorKind::Context(context))],
    }))
}

fn build_call(name: &str, mut args: Vec<Expr>) -> std::result::Result<Expr, &'static str> {
    let unary = |args: &mut Vec<Expr>| match args.len() {
        1 => args.pop().map(Expr::boxed).ok_or("missing argument"),
        _ => Err("elementary functions take exactly one argument"),
    };
    match name {
        "sin" => Ok(Expr::Sin(unary(&mut args)?)),
        "cos" => Ok(Expr::Cos(unary(&mut args)?)),
        "exp" => Ok(Expr::Exp(unary(&mut args)?)),
        "log" => Ok(Expr::Log(unary(&mut args)?)),
        "diff" => build_derivative(args),
        _ => Ok(Expr::func(name, args)),
    }
}

/// `diff(f(x, t), x, x)` raises the order of the slot holding each listed symbol.
fn build_derivative(mut args: Vec<Expr>) -> std::result::Result<Expr, &'static str> {
    if args.len() < 2 {
        return Err("diff expects a function and at least one variable");
    }
    let vars = args.split_off(1);
    let Some(Expr::Function {
        name,
        args: fargs,
        mut orders,
    }) = args.pop()
    else {
        return Err("diff expects a function application");
    };
    for var in vars {
        let slot = fargs
            .iter()
            .position(|arg| var.as_variable().is_some() && arg == &var)
            .ok_or("diff variable is not an argument of the function")?;
        orders[slot] += 1;
    }
    Ok(Expr::Function {
        name,
        args: fargs,
        orders,
    })
}

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> ParseResult<'a, O>
where
    F: FnMut(&'a str) -> ParseResult<'a, O>,
{
    delimited(multispace0, inner, multispace0)
}
