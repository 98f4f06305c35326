use super::CliError;
use super::helpers::*;
use super::interactive::{SessionContext, run_session_loop};
use meshcalc_core::common::build::BuildStamp;
use meshcalc_core::common::catalog::PRODUCT_TYPES;
use meshcalc_core::common::constants::CalculationConstants;
use meshcalc_core::domain::{InputField, ParseMode, ScreenInput, ScreenResult};
use meshcalc_core::engine::ScreenDimensions;
use meshcalc_core::report::{DocumentUploader, StubUploader};
use meshcalc_core::session::CalculatorSession;
use serde::Serialize;
use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(clap::Args, Default)]
pub(super) struct InputFlags {
    /// JSON file with screen input fields (camelCase keys); flags override it
    #[arg(long)]
    input: Option<PathBuf>,

    /// Product type label
    #[arg(long)]
    product: Option<String>,

    /// Mesh aperture (mm)
    #[arg(long, allow_hyphen_values = true)]
    mesh: Option<String>,

    /// Wire diameter (mm)
    #[arg(long, allow_hyphen_values = true)]
    wire: Option<String>,

    /// Screen length (mm)
    #[arg(long, allow_hyphen_values = true)]
    length: Option<String>,

    /// Loss margin added to the length (mm)
    #[arg(long, allow_hyphen_values = true)]
    loss: Option<String>,

    /// Screen width (mm)
    #[arg(long, allow_hyphen_values = true)]
    width: Option<String>,

    /// Hook allowance added to the width (mm)
    #[arg(long, allow_hyphen_values = true)]
    hook: Option<String>,

    /// Price per kilogram
    #[arg(long, allow_hyphen_values = true)]
    price_per_kg: Option<String>,

    /// Number of identical screens
    #[arg(long, allow_hyphen_values = true)]
    quantity: Option<String>,

    /// Finish annotation (stored upper-case)
    #[arg(long)]
    finish: Option<String>,

    /// Reject malformed numbers instead of treating them as zero
    #[arg(long)]
    strict: bool,
}

impl InputFlags {
    fn parse_mode(&self, config: &CliConfig) -> ParseMode {
        if self.strict || config.strict_parsing {
            ParseMode::Strict
        } else {
            ParseMode::Lenient
        }
    }

    fn into_session(self, config: &CliConfig) -> Result<CalculatorSession, CliError> {
        let mode = self.parse_mode(config);
        let base = match &self.input {
            Some(path) => load_input_file(path)?,
            None => ScreenInput::default(),
        };

        let mut session = CalculatorSession::with_input(base, mode);
        for (field, value) in [
            (InputField::ProductType, self.product),
            (InputField::MeshAperture, self.mesh),
            (InputField::WireDiameter, self.wire),
            (InputField::Length, self.length),
            (InputField::LossMargin, self.loss),
            (InputField::Width, self.width),
            (InputField::HookAllowance, self.hook),
            (InputField::PricePerKg, self.price_per_kg),
            (InputField::Quantity, self.quantity),
            (InputField::FinishNote, self.finish),
        ] {
            if let Some(value) = value {
                session.set_field(field, &value);
            }
        }
        warn_unknown_product(session.input());
        Ok(session)
    }
}

#[derive(clap::Args)]
pub(super) struct CalculateArgs {
    #[command(flatten)]
    input: InputFlags,

    /// Print the input snapshot and results as JSON
    #[arg(long)]
    json: bool,

    /// Also print the fixed calculation constants
    #[arg(long)]
    show_constants: bool,
}

#[derive(clap::Args)]
pub(super) struct ShareArgs {
    #[command(flatten)]
    input: InputFlags,
}

#[derive(clap::Args)]
pub(super) struct ExportArgs {
    #[command(flatten)]
    input: InputFlags,

    /// Directory for the report file (default from configuration)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Skip the upload attempt and keep only the local report
    #[arg(long)]
    no_upload: bool,
}

#[derive(clap::Args)]
pub(super) struct SessionArgs {
    /// Reject malformed numbers instead of treating them as zero
    #[arg(long)]
    strict: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CalculationReport<'a> {
    mode: ParseMode,
    input: &'a ScreenInput,
    dimensions: ScreenDimensions,
    result: &'a ScreenResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    constants: Option<CalculationConstants>,
}

pub(super) fn run_calculate_command(
    args: CalculateArgs,
    config: &CliConfig,
) -> Result<i32, CliError> {
    let show_constants = args.show_constants || config.show_constants;
    let mut session = args.input.into_session(config)?;
    let result = session.calculate()?;
    let input = session.input();
    let constants = show_constants.then(CalculationConstants::default);

    if args.json {
        let report = CalculationReport {
            mode: session.mode(),
            input,
            dimensions: ScreenDimensions::from_input(input),
            result: &result,
            constants,
        };
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|source| CliError::Internal(source.into()))?;
        println!("{}", rendered);
        return Ok(0);
    }

    println!("{}", render_results(input, &result));
    if let Some(constants) = constants {
        println!();
        println!("{}", render_constants(&constants));
    }
    Ok(0)
}

pub(super) fn run_share_command(args: ShareArgs, config: &CliConfig) -> Result<i32, CliError> {
    let mut session = args.input.into_session(config)?;
    session.calculate()?;
    let payload = session.share(&config.share_base_url)?;
    println!("{}", payload.message);
    println!();
    println!("{}", payload.link);
    Ok(0)
}

pub(super) fn run_export_command(args: ExportArgs, config: &CliConfig) -> Result<i32, CliError> {
    let settings = config.export_settings(args.output_dir);
    let uploader = (config.upload_enabled && !args.no_upload)
        .then(|| StubUploader::new(config.upload_base_url.clone()));

    let mut session = args.input.into_session(config)?;
    session.calculate()?;
    let outcome = session.export(
        &settings,
        uploader
            .as_ref()
            .map(|uploader| uploader as &dyn DocumentUploader),
    )?;

    println!("Report written: {}", outcome.local_path.display());
    match &outcome.reference {
        Some(reference) => println!("Report reference: {}", reference),
        None => println!("Report reference: none (local copy only)"),
    }
    println!("Share link: {}", outcome.share.link);
    Ok(0)
}

pub(super) fn run_session_command(args: SessionArgs, config: &CliConfig) -> Result<i32, CliError> {
    let mode = if args.strict || config.strict_parsing {
        ParseMode::Strict
    } else {
        ParseMode::Lenient
    };
    let context = SessionContext {
        share_base_url: config.share_base_url.clone(),
        export: config.export_settings(None),
        uploader: config
            .upload_enabled
            .then(|| StubUploader::new(config.upload_base_url.clone())),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    run_session_loop(
        stdin.lock(),
        &mut writer,
        CalculatorSession::new(mode),
        &context,
    )?;
    Ok(0)
}

pub(super) fn run_products_command() -> Result<i32, CliError> {
    for (index, product) in PRODUCT_TYPES.iter().enumerate() {
        println!("{:>2}. {}", index + 1, product);
    }
    Ok(0)
}

pub(super) fn run_constants_command(json: bool) -> Result<i32, CliError> {
    let constants = CalculationConstants::default();
    if json {
        let rendered = serde_json::to_string_pretty(&constants)
            .map_err(|source| CliError::Internal(source.into()))?;
        println!("{}", rendered);
    } else {
        println!("{}", render_constants(&constants));
    }
    Ok(0)
}

pub(super) fn run_version_command() -> Result<i32, CliError> {
    println!("meshcalc {}", BuildStamp::current());
    Ok(0)
}
