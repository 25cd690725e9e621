use calcore::{
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        parser::core::parse,
        preferences::{AngleUnit, ComplexFormat, FloatDisplayMode, Preferences},
    },
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// calcore evaluates calculator expressions over real numbers, complex
/// numbers and matrices.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Unit used by `sin` and `cos`. Defaults to radians.
    #[arg(long, value_enum)]
    angle_unit: Option<AngleUnit>,

    /// How real numbers are printed. Defaults to decimal.
    #[arg(long = "display", value_enum)]
    float_display_mode: Option<FloatDisplayMode>,

    /// How non-real numbers are printed. Defaults to cartesian.
    #[arg(long, value_enum)]
    complex_format: Option<ComplexFormat>,

    /// Print the fast real-only approximation instead of the exact value.
    #[arg(short, long)]
    approximate: bool,

    /// Defines a symbol before evaluation, e.g. `--define A=[[1,2],[3,4]]`.
    /// Later definitions may refer to earlier ones.
    #[arg(short, long = "define", value_name = "NAME=EXPR")]
    defines: Vec<String>,

    expression: String,
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                                  EnvFilter::new("warn")
                                              }))
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();
    let preferences = Preferences::new(args.angle_unit.unwrap_or_default(),
                                       args.float_display_mode.unwrap_or_default(),
                                       args.complex_format.unwrap_or_default());

    let context = build_context(&args.defines, &preferences).unwrap_or_else(|e| {
                                                                 eprintln!("{e}");
                                                                 std::process::exit(1);
                                                             });

    let expr = parse(&args.expression).unwrap_or_else(|e| {
                                          eprintln!("{e}");
                                          std::process::exit(1);
                                      });

    if args.approximate {
        println!("{}", context.approximate(&expr, preferences.angle_unit));
    } else {
        let value = context.evaluate(&expr, preferences.angle_unit);
        println!("{}",
                 value.create_layout(preferences.float_display_mode, preferences.complex_format));
    }
}

/// Evaluates each `NAME=EXPR` definition in order into a fresh context.
fn build_context(defines: &[String], preferences: &Preferences) -> Result<Context, String> {
    let mut context = Context::new();
    for definition in defines {
        let Some((name, source)) = definition.split_once('=') else {
            return Err(format!("Invalid definition '{definition}': expected NAME=EXPR."));
        };
        let expr = parse(source).map_err(|e: ParseError| format!("In definition of '{name}': {e}"))?;
        let value = context.evaluate(&expr, preferences.angle_unit);
        context.define(name.trim(), value);
    }
    Ok(context)
}
