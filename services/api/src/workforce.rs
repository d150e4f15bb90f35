use clap::Subcommand;
use people_analytics::error::AppError;
use people_analytics::workflows::workforce::{
    employee_nps, turnover_rate, AbsenteeismInputs, EnpsBreakdown,
};

#[derive(Subcommand, Debug)]
pub(crate) enum WorkforceCommand {
    /// Terminations over average headcount for a period, in percent
    TurnoverRate {
        #[arg(long)]
        terminations: u32,
        #[arg(long)]
        average_headcount: f64,
    },
    /// Employee net promoter score from 0-10 survey answers
    Enps {
        /// Comma separated survey scores
        #[arg(long, value_delimiter = ',', required = true)]
        scores: Vec<u8>,
    },
    /// Hours lost over effective agreed hours, in percent
    Absenteeism {
        #[arg(long)]
        hours_lost: f64,
        #[arg(long)]
        agreed_hours: f64,
        #[arg(long, default_value_t = 0.0)]
        overtime_hours: f64,
        #[arg(long, default_value_t = 0.0)]
        vacation_hours: f64,
    },
}

pub(crate) fn run_workforce(command: WorkforceCommand) -> Result<(), AppError> {
    match command {
        WorkforceCommand::TurnoverRate {
            terminations,
            average_headcount,
        } => {
            let rate = turnover_rate(terminations, average_headcount)?;
            println!(
                "Turnover rate: {rate:.2}% ({terminations} terminations / {average_headcount} average headcount)"
            );
        }
        WorkforceCommand::Enps { scores } => {
            let breakdown = employee_nps(&scores)?;
            render_enps(&breakdown);
        }
        WorkforceCommand::Absenteeism {
            hours_lost,
            agreed_hours,
            overtime_hours,
            vacation_hours,
        } => {
            let inputs = AbsenteeismInputs {
                hours_lost,
                agreed_hours,
                overtime_hours,
                vacation_and_holiday_hours: vacation_hours,
            };
            let rate = inputs.rate()?;
            println!(
                "Absenteeism rate: {rate:.2}% ({hours_lost} hours lost / {} effective agreed hours)",
                inputs.effective_agreed_hours()
            );
        }
    }
    Ok(())
}

pub(crate) fn render_enps(breakdown: &EnpsBreakdown) {
    println!(
        "eNPS: {:.1} from {} responses",
        breakdown.score, breakdown.responses
    );
    println!(
        "- promoters {} ({:.0}%) | passives {} | detractors {} ({:.0}%)",
        breakdown.promoters,
        breakdown.promoter_pct(),
        breakdown.passives,
        breakdown.detractors,
        breakdown.detractor_pct()
    );
}
