use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use verification_roi::{
    app::{self, AppError},
    calculator::Calculator,
    config::{self, Config},
    export::{self, ExportFormat, Report},
    i18n::{self, keys, Localize, Translator},
    input::InputField,
    rate_tables,
    roi::Variant,
    summary, ui_cli,
};

/// 본인확인 서비스 도입 ROI 계산기.
#[derive(Debug, Parser)]
#[command(name = "verification_roi", version, about)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 언어 (auto/ko/en)
    #[arg(long, short = 'L', global = true, default_value = "auto")]
    lang: String,
    /// 기본 로그 수준을 debug로 올린다. RUST_LOG가 있으면 그쪽이 우선한다.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 한 번 계산해서 결과를 출력한다.
    Calc {
        #[command(flatten)]
        inputs: InputArgs,
        /// 카드 대신 JSON으로 출력
        #[arg(long)]
        json: bool,
    },
    /// 계산 결과를 보고서 파일로 저장한다.
    Export {
        #[command(flatten)]
        inputs: InputArgs,
        /// 저장 경로. 생략하면 설정의 export_dir 아래에 만든다.
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// json / toml / txt
        #[arg(long, short)]
        format: Option<ExportFormat>,
    },
    /// 업종·회사 규모 계수 테이블을 출력한다.
    Industries,
}

/// 설정의 기본 입력값을 덮어쓰는 옵션. 숫자는 텍스트 그대로 받아 경계 규칙으로 변환한다.
#[derive(Debug, Args)]
struct InputArgs {
    #[arg(long)]
    variant: Option<Variant>,
    #[arg(long)]
    industry: Option<String>,
    #[arg(long)]
    company_size: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    monthly_verifications: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    current_fraud_rate: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    improvement_rate: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    avg_transaction_value: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    current_cost: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    our_cost: Option<String>,
    #[arg(long)]
    no_compliance: bool,
    #[arg(long)]
    no_operational: bool,
}

impl InputArgs {
    fn build(&self, cfg: &Config) -> Result<Calculator, AppError> {
        let mut calc = Calculator::new(cfg.defaults, self.variant.unwrap_or(cfg.variant));
        if let Some(key) = &self.industry {
            calc.set_industry(key)?;
        }
        if let Some(key) = &self.company_size {
            calc.set_company_size(key)?;
        }
        let fields = [
            (InputField::MonthlyVerifications, &self.monthly_verifications),
            (InputField::CurrentFraudRate, &self.current_fraud_rate),
            (InputField::ImprovementRate, &self.improvement_rate),
            (InputField::AvgTransactionValue, &self.avg_transaction_value),
            (InputField::CurrentCostPerVerification, &self.current_cost),
            (InputField::OurCostPerVerification, &self.our_cost),
        ];
        for (field, text) in fields {
            if let Some(text) = text {
                calc.set_field(field, text);
            }
        }
        if self.no_compliance {
            calc.set_include_compliance_costs(false);
        }
        if self.no_operational {
            calc.set_include_operational_efficiency(false);
        }
        Ok(calc)
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let lang = i18n::resolve_language(&cli.lang, None);
    if let Err(err) = try_run(cli) {
        let tr = Translator::new(&lang);
        log::debug!("{err}");
        eprintln!("{}: {}", tr.t(keys::ERROR_PREFIX), err.localize(&tr));
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    let tr = app::translator_for(&cfg, &cli.lang);
    match cli.command {
        None => app::run(&mut cfg, cli.config, &tr)?,
        Some(Command::Calc { inputs, json }) => {
            let calc = inputs.build(&cfg)?;
            if json {
                println!("{}", serde_json::to_string_pretty(calc.results())?);
            } else {
                println!("{}", tr.t(keys::RESULTS_HEADING));
                ui_cli::print_cards(&tr, &calc);
                println!();
                println!(
                    "{}",
                    summary::narrative(calc.inputs(), calc.results(), calc.variant(), &tr)
                );
            }
        }
        Some(Command::Export {
            inputs,
            output,
            format,
        }) => {
            let calc = inputs.build(&cfg)?;
            let report = Report::new(*calc.inputs(), *calc.results(), calc.variant());
            let path = output.unwrap_or_else(|| {
                let format = format.unwrap_or(cfg.default_export_format);
                let name = export::default_file_name(format, chrono::Utc::now());
                Path::new(&cfg.export_dir).join(name)
            });
            let written = report.write_to(&path, format, &tr)?;
            println!(
                "{} {} ({})",
                tr.t(keys::EXPORT_DONE),
                path.display(),
                written.extension()
            );
        }
        Some(Command::Industries) => print_tables(),
    }
    Ok(())
}

fn print_tables() {
    println!(
        "{:<20} {:>14} {:>10} {:>8} {:>10} {:>10}",
        "industry", "violation $", "op. gain", "risk x", "fraud x*", "breach $*"
    );
    for row in rate_tables::industries() {
        println!(
            "{:<20} {:>14} {:>10} {:>8} {:>10} {:>10}",
            row.industry.id(),
            summary::format_number(row.compliance_violation_cost, 0),
            row.operational_efficiency_gain,
            row.risk_multiplier,
            row.fraud_loss_multiplier,
            row.breach_cost_per_record
        );
    }
    println!("* not used by the current formulas");
    println!();
    for row in rate_tables::company_sizes() {
        println!("{:<20} x{}", row.size.id(), row.multiplier);
    }
}
