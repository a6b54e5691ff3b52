use nestegg::config::{IncomeMode, NestEggPaths, Settings};
use nestegg::engine::{compose, CalculationInput, GoalHorizon, IncomeBasis};
use nestegg::models::{
    Frequency, IncomeCategory, IncomeSource, Money, MonthPeriod, SavingsBaseline,
    SavingsPercentage,
};
use nestegg::services::{DashboardService, GoalService, IncomeService, SavingsService};
use nestegg::storage::Storage;
use tempfile::TempDir;

fn dollars(d: i64) -> Money {
    Money::from_dollars(d)
}

fn storage(temp_dir: &TempDir) -> Storage {
    let paths = NestEggPaths::with_base_dir(temp_dir.path().to_path_buf());
    let mut storage = Storage::new(paths).unwrap();
    storage.load_all().unwrap();
    storage
}

#[test]
fn salary_plus_yearly_bonus() {
    let sources = vec![
        IncomeSource::monthly("Job", dollars(3000), IncomeCategory::Salary),
        IncomeSource::yearly("Bonus", dollars(1200), IncomeCategory::Other),
    ];

    let result = compose(&CalculationInput {
        period: MonthPeriod::new(2025, 6),
        income: IncomeBasis::Sources(&sources),
        baseline: SavingsBaseline::default(),
        savings_percentage: SavingsPercentage::new(20.0),
    });

    assert_eq!(result.monthly_income, dollars(3100));
    assert_eq!(result.yearly_income, dollars(37200));
    assert_eq!(result.monthly_savings_target, dollars(620));
    assert_eq!(result.yearly_savings_target, dollars(7440));
    assert_eq!(result.projection_for(5).unwrap().projected_total, dollars(37200));

    let years: Vec<i32> = result.projections.iter().map(|p| p.years_ahead).collect();
    assert_eq!(years, vec![1, 3, 5, 10]);
    assert_eq!(result.breakdown.len(), 2);
}

#[test]
fn baseline_is_added_to_every_projection() {
    let sources = vec![IncomeSource::monthly("Job", dollars(1000), IncomeCategory::Salary)];

    let result = compose(&CalculationInput {
        period: MonthPeriod::new(2025, 1),
        income: IncomeBasis::Sources(&sources),
        baseline: SavingsBaseline::new(dollars(2000), dollars(500)),
        savings_percentage: SavingsPercentage::new(10.0),
    });

    assert_eq!(result.projection_for(1).unwrap().projected_total, dollars(3700));
    assert_eq!(result.projection_for(10).unwrap().projected_total, dollars(14500));
}

#[test]
fn dashboard_from_stored_sources_and_entries() {
    let temp_dir = TempDir::new().unwrap();
    let storage = storage(&temp_dir);
    let period = MonthPeriod::new(2025, 3);

    let income = IncomeService::new(&storage);
    income
        .add_source("Job", dollars(3000), Frequency::Monthly, IncomeCategory::Salary)
        .unwrap();
    income
        .add_source("Bonus", dollars(1200), Frequency::Yearly, IncomeCategory::Other)
        .unwrap();

    let mut settings = Settings::default();
    settings.savings_percentage = SavingsPercentage::new(20.0);
    let dashboard = DashboardService::new(&storage, &settings);

    let from_sources = dashboard.calculate(period, IncomeMode::Sources).unwrap();
    assert_eq!(from_sources.monthly_savings_target, dollars(620));

    // Nothing recorded yet
    let empty = dashboard.calculate(period, IncomeMode::Entries).unwrap();
    assert!(empty.monthly_income.is_zero());

    let created = income.materialize_month(period).unwrap();
    assert_eq!(created.len(), 2);
    assert!(income.materialize_month(period).unwrap().is_empty());
    income
        .add_one_off(period, "Refund", dollars(100), IncomeCategory::Other)
        .unwrap();

    let from_entries = dashboard.calculate(period, IncomeMode::Entries).unwrap();
    assert_eq!(from_entries.monthly_income, dollars(3200));
    assert_eq!(from_entries.yearly_income, dollars(3200));
}

#[test]
fn goal_time_to_target_follows_savings_rate() {
    let temp_dir = TempDir::new().unwrap();
    let storage = storage(&temp_dir);
    let period = MonthPeriod::new(2025, 1);

    IncomeService::new(&storage)
        .add_source("Job", dollars(3100), Frequency::Monthly, IncomeCategory::Salary)
        .unwrap();
    let goals = GoalService::new(&storage);
    goals.add("Emergency Fund", dollars(5000), None).unwrap();
    goals.add("Laptop", dollars(1000), None).unwrap();
    goals.contribute("laptop", dollars(1000)).unwrap();

    let settings = Settings::default();
    let progress = DashboardService::new(&storage, &settings)
        .goal_progress(period, IncomeMode::Sources)
        .unwrap();

    let emergency = progress.iter().find(|g| g.name == "Emergency Fund").unwrap();
    assert_eq!(emergency.horizon, GoalHorizon::Months(9));
    let laptop = progress.iter().find(|g| g.name == "Laptop").unwrap();
    assert_eq!(laptop.horizon, GoalHorizon::Months(0));
    assert_eq!(laptop.percent_complete, 100.0);

    let mut nothing_saved = Settings::default();
    nothing_saved.savings_percentage = SavingsPercentage::new(0.0);
    let progress = DashboardService::new(&storage, &nothing_saved)
        .goal_progress(period, IncomeMode::Sources)
        .unwrap();
    assert!(progress.iter().all(|g| g.horizon == GoalHorizon::Unreachable));
}

#[test]
fn yearly_savings_summary() {
    let temp_dir = TempDir::new().unwrap();
    let storage = storage(&temp_dir);
    let jan = MonthPeriod::new(2025, 1);
    let feb = MonthPeriod::new(2025, 2);

    let income = IncomeService::new(&storage);
    income.add_one_off(jan, "Pay", dollars(2000), IncomeCategory::Salary).unwrap();
    income.add_one_off(feb, "Pay", dollars(2000), IncomeCategory::Salary).unwrap();

    let savings = SavingsService::new(&storage);
    savings.record(jan, dollars(400), None).unwrap();
    savings.record(feb, dollars(100), None).unwrap();
    // Replaces February's record
    savings.record(feb, dollars(600), Some("bonus month".into())).unwrap();

    let settings = Settings::default();
    let summary = DashboardService::new(&storage, &settings)
        .savings_summary(2025)
        .unwrap();

    assert_eq!(summary.months.len(), 12);
    assert_eq!(summary.total_income, dollars(4000));
    assert_eq!(summary.total_saved, dollars(1000));
    assert!((summary.savings_rate - 25.0).abs() < 1e-9);
    assert!(summary.months[2].income.is_zero());
    assert_eq!(summary.months[2].savings_rate, 0.0);
}

#[test]
fn data_survives_reload() {
    let temp_dir = TempDir::new().unwrap();
    let period = MonthPeriod::new(2025, 4);

    {
        let storage = storage(&temp_dir);
        IncomeService::new(&storage)
            .add_source("Job", dollars(2500), Frequency::Monthly, IncomeCategory::Salary)
            .unwrap();
        SavingsService::new(&storage)
            .record(period, dollars(300), None)
            .unwrap();
        GoalService::new(&storage)
            .add("House", dollars(40000), None)
            .unwrap();
    }

    let storage = storage(&temp_dir);
    assert_eq!(storage.income_sources.get_all().unwrap().len(), 1);
    assert_eq!(storage.savings.get_for_period(period).unwrap().saved, dollars(300));
    assert_eq!(storage.goals.get_all().unwrap()[0].name, "House");
    assert_eq!(storage.audit().read_all().unwrap().len(), 3);
}
