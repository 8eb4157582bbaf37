//! Controller scenarios covering navigation, oracle and plan together.

use jiff::civil::{date, Date};
use rand::{rngs::StdRng, SeedableRng};

use super::*;
use crate::{
    backup::BackupDocument,
    db::{Database, DeletedRecipe, MealPlanStore, RecipeStore},
    error::GachaError,
    models::{OracleFilter, PlanEntry, Recipe, Week},
    navigator::MemoryHistory,
    params::RecipeForm,
};

const TODAY: Date = date(2024, 5, 8);

type TestApp<S = Database> = App<S, MemoryHistory, Vec<Surface>>;

fn seeded_db() -> Database {
    let mut db = Database::in_memory().unwrap();
    db.upsert(&Recipe::new("A", "Chili").with_minutes(45).with_rating(5))
        .unwrap();
    db.upsert(
        &Recipe::new("B", "Salad")
            .with_minutes(15)
            .with_rating(3)
            .with_tags(["Veggie"]),
    )
    .unwrap();
    db
}

fn start_app(fragment: &str) -> TestApp {
    App::start(seeded_db(), MemoryHistory::new(fragment), Vec::new()).with_today(TODAY)
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(11)
}

fn only_salad() -> OracleFilter {
    OracleFilter {
        quick: true,
        vegetarian: true,
    }
}

#[test]
fn test_start_draws_every_surface() {
    let app = start_app("#view-weekplan");
    assert_eq!(app.view(), View::WeekPlan);
    assert_eq!(
        app.renderer(),
        &vec![
            Surface::Cookbook,
            Surface::WeekPlan,
            Surface::Oracle,
            Surface::Navigation
        ]
    );
}

#[test]
fn test_add_recipe_closes_form_through_history() {
    let mut app = start_app("");
    app.open_new_recipe();
    assert_eq!(app.navigator().history().len(), 2);

    let recipe = app
        .save_recipe(RecipeForm {
            title: "Pfannkuchen".to_string(),
            time_minutes: 20,
            tags: vec!["Veggie".to_string()],
            rating: 4,
            ..Default::default()
        })
        .unwrap();

    assert!(recipe.id.starts_with("uuid-"));
    assert_eq!(app.modal(), None);
    assert_eq!(app.view(), View::Cookbook);
    assert_eq!(app.navigator().history().index(), 0);
    assert_eq!(app.recipes().unwrap().len(), 3);
}

#[test]
fn test_invalid_form_keeps_modal_open() {
    let mut app = start_app("");
    app.open_new_recipe();
    let result = app.save_recipe(RecipeForm::default());
    assert!(matches!(result, Err(GachaError::InvalidInput { .. })));
    assert_eq!(app.modal(), Some(Modal::AddEditRecipe));
    assert_eq!(app.recipes().unwrap().len(), 2);
}

#[test]
fn test_edit_recipe_keeps_id_and_last_cooked() {
    let mut db = seeded_db();
    let mut cooked = Recipe::new("C", "Curry").with_rating(2);
    cooked.last_cooked = Some(date(2024, 4, 30));
    db.upsert(&cooked).unwrap();
    let mut app: TestApp = App::start(db, MemoryHistory::new(""), Vec::new()).with_today(TODAY);

    let mut form = app.open_edit_recipe("C").unwrap();
    assert_eq!(app.editing(), Some("C"));
    assert_eq!(form.title, "Curry");
    form.rating = 5;

    let saved = app.save_recipe(form).unwrap();
    assert_eq!(saved.id, "C");
    assert_eq!(saved.last_cooked, Some(date(2024, 4, 30)));
    assert_eq!(app.recipes().unwrap().len(), 3);
    assert_eq!(app.editing(), None);
}

#[test]
fn test_edit_unknown_recipe_opens_nothing() {
    let mut app = start_app("");
    assert!(matches!(
        app.open_edit_recipe("missing"),
        Err(GachaError::RecipeNotFound { .. })
    ));
    assert_eq!(app.modal(), None);
    assert_eq!(app.navigator().history().len(), 1);
}

#[test]
fn test_empty_pool_changes_nothing() {
    let mut app = start_app("#view-oracle");
    let before = app.renderer().len();
    let filter = OracleFilter {
        quick: true,
        vegetarian: false,
    };
    app.store.delete("B").unwrap();

    let result = app.spin(&filter, &mut rng());
    assert!(matches!(result, Err(GachaError::EmptyPool)));
    assert_eq!(app.oracle().result, None);
    assert_eq!(app.renderer().len(), before);
    assert_eq!(app.recipes().unwrap().len(), 1);
    assert!(app.store().entries().unwrap().is_empty());
}

#[test]
fn test_accept_without_target_opens_day_picker() {
    let mut app = start_app("#view-oracle");
    app.spin(&only_salad(), &mut rng()).unwrap();

    assert_eq!(app.accept().unwrap(), Acceptance::ChooseDay);
    assert_eq!(app.modal(), Some(Modal::DaySelection));
    assert!(app.store().entries().unwrap().is_empty());
    assert_eq!(app.day_selection_week().unwrap().start(), Some(date(2024, 5, 6)));

    let choice = app.choose_day(date(2024, 5, 9), false).unwrap();
    assert!(matches!(choice, DayChoice::Planned { .. }));
    assert_eq!(
        app.store().entries().unwrap(),
        vec![PlanEntry {
            date: date(2024, 5, 9),
            recipe_id: "B".to_string()
        }]
    );
    assert_eq!(app.view(), View::WeekPlan);
    assert_eq!(app.modal(), None);
    assert_eq!(app.oracle().result, None);
}

#[test]
fn test_choose_occupied_day_needs_replace() {
    let mut app = start_app("#view-oracle");
    app.store.set(date(2024, 5, 9), "A").unwrap();
    app.spin(&only_salad(), &mut rng()).unwrap();
    app.accept().unwrap();

    let choice = app.choose_day(date(2024, 5, 9), false).unwrap();
    let DayChoice::Occupied { current, .. } = choice else {
        panic!("expected the day to be reported as occupied");
    };
    assert_eq!(current.id, "A");
    assert_eq!(app.modal(), Some(Modal::DaySelection));
    assert_eq!(app.store().planned(date(2024, 5, 9)).unwrap().as_deref(), Some("A"));

    app.choose_day(date(2024, 5, 9), true).unwrap();
    assert_eq!(app.store().planned(date(2024, 5, 9)).unwrap().as_deref(), Some("B"));
}

#[test]
fn test_slot_to_oracle_to_plan() {
    let mut app = start_app("#view-weekplan");
    let slot = date(2024, 5, 10);
    app.fill_day(slot);
    assert_eq!(app.modal(), Some(Modal::Slot));

    app.ask_oracle_for_slot().unwrap();
    assert_eq!(app.view(), View::Oracle);
    assert_eq!(app.modal(), None);
    assert_eq!(app.oracle().target_date, Some(slot));
    assert_eq!(app.oracle().accept_label(), "Take it for 10.05.");

    app.spin(&only_salad(), &mut rng()).unwrap();
    let accepted = app.accept().unwrap();
    assert!(matches!(accepted, Acceptance::Planned { date, .. } if date == slot));

    assert_eq!(
        app.store().entries().unwrap(),
        vec![PlanEntry {
            date: slot,
            recipe_id: "B".to_string()
        }]
    );
    assert_eq!(app.oracle().target_date, None);
    assert_eq!(app.oracle().result, None);
    assert_eq!(app.view(), View::WeekPlan);
}

#[test]
fn test_leaving_oracle_clears_target() {
    let mut app = start_app("#view-weekplan");
    app.fill_day(date(2024, 5, 10));
    app.ask_oracle_for_slot().unwrap();

    app.switch_view(View::Cookbook);
    assert_eq!(app.oracle().target_date, None);
}

#[test]
fn test_entering_oracle_resets_result() {
    let mut app = start_app("#view-oracle");
    app.spin(&OracleFilter::default(), &mut rng()).unwrap();
    assert!(app.oracle().result.is_some());

    app.switch_view(View::Cookbook);
    app.back();
    assert_eq!(app.view(), View::Oracle);
    assert_eq!(app.oracle().result, None);
}

#[test]
fn test_closing_day_picker_keeps_result() {
    let mut app = start_app("#view-oracle");
    app.spin(&only_salad(), &mut rng()).unwrap();
    app.accept().unwrap();

    app.dismiss(Modal::DaySelection);
    assert_eq!(app.modal(), None);
    assert!(app.oracle().result.is_some());
}

#[test]
fn test_delete_recipe_cleans_plan_and_result() {
    let mut app = start_app("#view-oracle");
    app.store.set(date(2024, 5, 6), "B").unwrap();
    app.store.set(date(2024, 5, 7), "A").unwrap();
    app.store.set(date(2024, 5, 13), "B").unwrap();
    app.spin(&only_salad(), &mut rng()).unwrap();

    let DeletedRecipe { cleared_dates, .. } = app.delete_recipe("B").unwrap();
    assert_eq!(cleared_dates, vec![date(2024, 5, 6), date(2024, 5, 13)]);
    assert_eq!(app.store().entries().unwrap().len(), 1);
    assert_eq!(app.oracle().result, None);
}

#[test]
fn test_delete_from_form_closes_it() {
    let mut app = start_app("");
    app.open_edit_recipe("A").unwrap();
    app.delete_editing_recipe().unwrap();
    assert_eq!(app.modal(), None);
    assert_eq!(app.editing(), None);
    assert!(app.delete_editing_recipe().is_err());
}

#[test]
fn test_pick_for_slot_closes_modal() {
    let mut app = start_app("#view-weekplan");
    app.fill_day(date(2024, 5, 11));
    assert_eq!(app.slot_candidates("chi").unwrap().len(), 1);

    app.pick_for_slot("A").unwrap();
    assert_eq!(app.modal(), None);
    let week = app.week().unwrap();
    assert_eq!(week.days[5].recipe.as_ref().map(|r| r.id.as_str()), Some("A"));
}

#[test]
fn test_pick_without_slot_fails() {
    let mut app = start_app("#view-weekplan");
    assert!(matches!(
        app.pick_for_slot("A"),
        Err(GachaError::InvalidInput { .. })
    ));
}

#[test]
fn test_clear_week_only_touches_displayed_week() {
    let mut app = start_app("#view-weekplan");
    app.store.set(date(2024, 5, 6), "A").unwrap();
    app.store.set(date(2024, 5, 12), "B").unwrap();
    app.store.set(date(2024, 5, 13), "A").unwrap();

    assert_eq!(app.clear_week().unwrap(), 2);
    assert_eq!(app.store().entries().unwrap().len(), 1);

    app.change_week(1).unwrap();
    assert_eq!(app.week_offset(), 1);
    assert_eq!(app.week().unwrap().start(), Some(date(2024, 5, 13)));
    assert!(app.clear_day(date(2024, 5, 13)).unwrap());
    assert!(!app.clear_day(date(2024, 5, 13)).unwrap());
}

#[test]
fn test_change_week_rejects_offsets_past_the_calendar() {
    let mut app = start_app("#view-weekplan");
    app.change_week(3).unwrap();
    app.renderer_mut().clear();

    let err = app.change_week(i32::MAX).unwrap_err();
    assert!(matches!(err, GachaError::InvalidInput { .. }));
    assert_eq!(app.week_offset(), 3);
    assert!(app.renderer().is_empty());
    assert!(app.week().is_ok());
}

#[test]
fn test_import_legacy_backup_closes_modal() {
    let mut app = start_app("");
    app.open_backup();
    let json = r#"{
        "recipes": [{"id": "X", "title": "Soup", "image": "https://images.unsplash.com/x"}],
        "weeklyPlan": {"Friday": "X"}
    }"#;

    let result = app.import_backup(json).unwrap();
    assert_eq!(result.recipes, 1);
    assert_eq!(result.report.converted_weekdays, 1);
    assert_eq!(app.modal(), None);
    assert_eq!(app.store().planned(date(2024, 5, 10)).unwrap().as_deref(), Some("X"));

    let exported = app.export_backup().unwrap();
    assert!(!exported.contains("weeklyPlan"));
    let (document, _) = BackupDocument::parse(&exported, TODAY).unwrap();
    assert!(document.recipes[0].image.starts_with("https://placehold.co/"));
}

#[test]
fn test_malformed_import_writes_nothing() {
    let mut app = start_app("");
    app.open_backup();
    let result = app.import_backup(r#"{"recipes": []}"#);
    assert!(matches!(result, Err(GachaError::MalformedBackup { .. })));
    assert_eq!(app.recipes().unwrap().len(), 2);
    assert_eq!(app.modal(), Some(Modal::DataBackup));
}

#[test]
fn test_unknown_view_name_leaves_history() {
    let mut app = start_app("");
    assert!(app.navigate_to("pantry").is_err());
    assert_eq!(app.navigator().history().len(), 1);
    assert_eq!(app.navigate_to("week").unwrap(), View::WeekPlan);
    assert_eq!(app.navigator().history().fragment(), "#view-weekplan");
}

/// Wraps a database and rejects every meal plan write.
struct ReadOnlyPlan(Database);

impl RecipeStore for ReadOnlyPlan {
    fn list(&self) -> crate::Result<Vec<Recipe>> {
        self.0.list()
    }
    fn get(&self, id: &str) -> crate::Result<Option<Recipe>> {
        RecipeStore::get(&self.0, id)
    }
    fn upsert(&mut self, recipe: &Recipe) -> crate::Result<bool> {
        self.0.upsert(recipe)
    }
    fn delete(&mut self, id: &str) -> crate::Result<DeletedRecipe> {
        self.0.delete(id)
    }
    fn search(&self, term: &str) -> crate::Result<Vec<Recipe>> {
        self.0.search(term)
    }
}

impl MealPlanStore for ReadOnlyPlan {
    fn planned(&self, date: Date) -> crate::Result<Option<String>> {
        self.0.planned(date)
    }
    fn set(&mut self, _date: Date, _recipe_id: &str) -> crate::Result<()> {
        Err(GachaError::database("Failed to write meal plan entry")
            .with_source(rusqlite::Error::InvalidQuery))
    }
    fn clear(&mut self, date: Date) -> crate::Result<bool> {
        self.0.clear(date)
    }
    fn entries(&self) -> crate::Result<Vec<PlanEntry>> {
        self.0.entries()
    }
    fn clear_range(&mut self, dates: &[Date]) -> crate::Result<usize> {
        self.0.clear_range(dates)
    }
}

impl Store for ReadOnlyPlan {
    fn week(&self, today: Date, offset: i32) -> crate::Result<Week> {
        Store::week(&self.0, today, offset)
    }
    fn export_document(&self) -> crate::Result<BackupDocument> {
        Store::export_document(&self.0)
    }
    fn replace_all(&mut self, document: &BackupDocument) -> crate::Result<()> {
        Store::replace_all(&mut self.0, document)
    }
}

#[test]
fn test_failed_write_keeps_session() {
    let mut app: TestApp<ReadOnlyPlan> =
        App::start(ReadOnlyPlan(seeded_db()), MemoryHistory::new("#view-weekplan"), Vec::new())
            .with_today(TODAY);
    app.fill_day(date(2024, 5, 10));
    app.ask_oracle_for_slot().unwrap();
    app.spin(&only_salad(), &mut rng()).unwrap();

    assert!(matches!(app.accept(), Err(GachaError::Database { .. })));
    assert_eq!(app.view(), View::Oracle);
    assert_eq!(app.oracle().target_date, Some(date(2024, 5, 10)));
    assert!(app.oracle().result.is_some());
}
