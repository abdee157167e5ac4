use crate::db::store::{AuditLog, ExpenseStore, PlantStore};
use crate::errors::{AppError, AppResult};
use crate::models::expense::Expense;
use chrono::{DateTime, Local};

pub struct ExpenseLogic;

impl ExpenseLogic {
    pub fn add<S>(
        store: &S,
        plant_id: i64,
        amount: f64,
        note: Option<String>,
        spent_at: DateTime<Local>,
    ) -> AppResult<Expense>
    where
        S: PlantStore + ExpenseStore + AuditLog,
    {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(AppError::InvalidAmount(amount));
        }
        let plant = store
            .plant(plant_id)?
            .ok_or(AppError::PlantNotFound(plant_id))?;

        let mut expense = Expense {
            id: 0,
            plant_id,
            spent_at,
            amount,
            note: note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
        };
        expense.id = store.insert_expense(&expense)?;

        store.audit(
            "expense",
            &plant_id.to_string(),
            &format!("Spent {:.2} on '{}'", amount, plant.name),
        );
        Ok(expense)
    }

    /// Expenses of a plant, oldest first, with their total.
    pub fn list<S>(store: &S, plant_id: i64) -> AppResult<(Vec<Expense>, f64)>
    where
        S: PlantStore + ExpenseStore,
    {
        store
            .plant(plant_id)?
            .ok_or(AppError::PlantNotFound(plant_id))?;

        let mut expenses = store.expenses_for_plant(plant_id)?;
        expenses.sort_by_key(|e| (e.spent_at, e.id));
        let total = expenses.iter().map(|e| e.amount).sum();
        Ok((expenses, total))
    }

    pub fn delete<S>(store: &S, id: i64) -> AppResult<()>
    where
        S: ExpenseStore + AuditLog,
    {
        if !store.delete_expense(id)? {
            return Err(AppError::ExpenseNotFound(id));
        }
        store.audit("expense_del", &id.to_string(), "Deleted expense");
        Ok(())
    }
}
