use crate::errors::AppError;
use crate::ledger::Ledger;
use crate::models::{
    AddTransactionForm, DeleteTransactionForm, EditTransactionForm, SummaryResponse, Transaction,
    TransactionKind,
};
use crate::state::AppState;
use crate::storage::persist_ledger;
use crate::ui::{render_delete, render_edit, render_index, WIDGET_SCRIPT};
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Redirect},
    Form, Json,
};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let ledger = state.ledger.lock().await;
    Html(render_index(ledger.transactions()))
}

pub async fn add_transaction(
    State(state): State<AppState>,
    Form(form): Form<AddTransactionForm>,
) -> Result<Redirect, AppError> {
    let kind = parse_kind(&form.kind)?;
    let amount = parse_amount(&form.amount)?;

    let mut ledger = state.ledger.lock().await;
    let mut updated = ledger.clone();
    let tx = updated.add(kind, amount, form.description)?;
    commit(&state, &mut ledger, updated).await?;
    info!(id = tx.id, kind = %tx.kind, amount = tx.amount, "transaction added");

    Ok(Redirect::to("/"))
}

pub async fn edit_page() -> Html<String> {
    Html(render_edit())
}

pub async fn edit_transaction(
    State(state): State<AppState>,
    Form(form): Form<EditTransactionForm>,
) -> Result<Redirect, AppError> {
    let id = parse_id(&form.id)?;
    let kind = parse_kind(&form.kind)?;
    let amount = parse_amount(&form.amount)?;

    let mut ledger = state.ledger.lock().await;
    let mut updated = ledger.clone();
    updated.edit(id, kind, amount, form.description)?;
    commit(&state, &mut ledger, updated).await?;
    info!(id, "transaction edited");

    Ok(Redirect::to("/"))
}

pub async fn delete_page() -> Html<String> {
    Html(render_delete())
}

pub async fn delete_transaction(
    State(state): State<AppState>,
    Form(form): Form<DeleteTransactionForm>,
) -> Result<Redirect, AppError> {
    let id = parse_id(&form.id)?;

    let mut ledger = state.ledger.lock().await;
    let mut updated = ledger.clone();
    updated.delete(id)?;
    commit(&state, &mut ledger, updated).await?;
    info!(id, "transaction deleted");

    Ok(Redirect::to("/"))
}

pub async fn get_summary(State(state): State<AppState>) -> Json<SummaryResponse> {
    let ledger = state.ledger.lock().await;
    Json(ledger.summary())
}

pub async fn get_transactions(State(state): State<AppState>) -> Json<Vec<Transaction>> {
    let ledger = state.ledger.lock().await;
    Json(ledger.transactions().to_vec())
}

pub async fn widget_script() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/javascript; charset=utf-8")], WIDGET_SCRIPT)
}

/// Writes `updated` to disk and only then replaces the shared ledger, so a
/// failed write leaves memory matching the file.
async fn commit(state: &AppState, ledger: &mut Ledger, updated: Ledger) -> Result<(), AppError> {
    persist_ledger(&state.data_path, &updated).await?;
    *ledger = updated;
    Ok(())
}

fn parse_kind(value: &str) -> Result<TransactionKind, AppError> {
    value.parse().map_err(AppError::bad_request)
}

fn parse_amount(value: &str) -> Result<f64, AppError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| AppError::bad_request("Invalid amount"))
}

fn parse_id(value: &str) -> Result<u32, AppError> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::bad_request("Invalid ID"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn amounts_must_be_finite_numbers() {
        assert_eq!(parse_amount(" 12.50 ").unwrap(), 12.5);
        for bad in ["", "abc", "inf", "NaN"] {
            let err = parse_amount(bad).unwrap_err();
            assert_eq!(err.status, StatusCode::BAD_REQUEST);
            assert_eq!(err.message, "Invalid amount");
        }
    }

    #[test]
    fn ids_must_be_unsigned() {
        assert_eq!(parse_id("7").unwrap(), 7);
        assert_eq!(parse_id("-1").unwrap_err().message, "Invalid ID");
    }

    #[test]
    fn unknown_kind_is_bad_request() {
        let err = parse_kind("Transfer").unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    fn unwritable_state(ledger: Ledger) -> AppState {
        let mut path = std::env::temp_dir();
        path.push(format!("finance_tracker_missing_{}", std::process::id()));
        path.push("nested");
        path.push("transactions.json");
        AppState::new(path, ledger)
    }

    #[tokio::test]
    async fn failed_write_leaves_ledger_unchanged() {
        let mut ledger = Ledger::default();
        let existing = ledger.add(TransactionKind::Income, 10.0, "gift").unwrap();
        let state = unwritable_state(ledger);

        let form = AddTransactionForm {
            kind: "Income".into(),
            amount: "50".into(),
            description: "bonus".into(),
        };
        let err = add_transaction(State(state.clone()), Form(form))
            .await
            .err()
            .expect("request should fail");
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);

        let form = EditTransactionForm {
            id: existing.id.to_string(),
            kind: "Expense".into(),
            amount: "99".into(),
            description: "changed".into(),
        };
        let err = edit_transaction(State(state.clone()), Form(form))
            .await
            .err()
            .expect("request should fail");
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);

        let form = DeleteTransactionForm {
            id: existing.id.to_string(),
        };
        let err = delete_transaction(State(state.clone()), Form(form))
            .await
            .err()
            .expect("request should fail");
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);

        let ledger = state.ledger.lock().await;
        assert_eq!(ledger.transactions(), &[existing]);
        assert_eq!(ledger.summary().income_total, 10.0);
    }

    #[tokio::test]
    async fn exhausted_ids_are_server_errors() {
        let ledger: Ledger = serde_json::from_str(
            r#"[{"id":4294967295,"type":"Income","amount":1.0,"description":"last"}]"#,
        )
        .unwrap();
        let state = unwritable_state(ledger);

        let form = AddTransactionForm {
            kind: "Expense".into(),
            amount: "2".into(),
            description: String::new(),
        };
        let err = add_transaction(State(state.clone()), Form(form))
            .await
            .err()
            .expect("request should fail");
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(state.ledger.lock().await.transactions().len(), 1);
    }
}
