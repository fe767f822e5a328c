use crate::models::Transaction;
use crate::widget::format_amount;

pub fn render_index(transactions: &[Transaction]) -> String {
    let rows = if transactions.is_empty() {
        r#"<tr><td colspan="4" class="empty">No transactions yet.</td></tr>"#.to_string()
    } else {
        transactions.iter().map(render_row).collect::<Vec<_>>().join("\n")
    };

    INDEX_HTML
        .replace("{{STYLE}}", STYLE)
        .replace("{{ROWS}}", &rows)
}

pub fn render_edit() -> String {
    page(
        "Edit Transaction",
        r#"<form class="card form" method="post" action="/edit">
      <label>ID <input name="id" type="number" min="1" required /></label>
      <label>Type
        <select name="type">
          <option>Income</option>
          <option>Expense</option>
        </select>
      </label>
      <label>Amount <input name="amount" type="number" step="0.01" required /></label>
      <label>Description <input name="description" type="text" /></label>
      <button type="submit">Save</button>
      <a href="/">Cancel</a>
    </form>"#,
    )
}

pub fn render_delete() -> String {
    page(
        "Delete Transaction",
        r#"<form class="card form" method="post" action="/delete">
      <label>ID <input name="id" type="number" min="1" required /></label>
      <button class="danger" type="submit">Delete</button>
      <a href="/">Cancel</a>
    </form>"#,
    )
}

fn render_row(tx: &Transaction) -> String {
    format!(
        r#"<tr><td>{}</td><td>{}</td><td class="amount">{}</td><td>{}</td></tr>"#,
        tx.id,
        tx.kind,
        format_amount(tx.amount),
        escape_html(&tx.description)
    )
}

fn page(title: &str, body: &str) -> String {
    PAGE_HTML
        .replace("{{STYLE}}", STYLE)
        .replace("{{TITLE}}", title)
        .replace("{{BODY}}", body)
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const STYLE: &str = r#"
    :root {
      --bg: #f4f1ea;
      --ink: #2b2a28;
      --accent: #2f7a5b;
      --danger: #c63b2b;
      --card: #ffffff;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      display: grid;
      gap: 24px;
    }

    .card {
      background: var(--card);
      border-radius: 18px;
      padding: 20px;
      border: 1px solid rgba(0, 0, 0, 0.06);
    }

    .form {
      display: grid;
      gap: 12px;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      color: #8b857d;
    }

    .value {
      display: block;
      font-size: 1.6rem;
      font-weight: 600;
    }

    .hidden {
      display: none;
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    td, th {
      text-align: left;
      padding: 8px;
      border-bottom: 1px solid rgba(0, 0, 0, 0.06);
    }

    .amount {
      text-align: right;
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    button.danger {
      background: var(--danger);
    }
"#;

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <title>{{TITLE}}</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main class="app">
    <h1>{{TITLE}}</h1>
    {{BODY}}
  </main>
</body>
</html>
"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Personal Finance Tracker</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Personal Finance Tracker</h1>
      <nav><a href="/edit">Edit a transaction</a> · <a href="/delete">Delete a transaction</a></nav>
    </header>

    <form class="card form" method="post" action="/add">
      <label>Type
        <select name="type">
          <option>Income</option>
          <option>Expense</option>
        </select>
      </label>
      <label>Amount <input name="amount" type="number" step="0.01" required /></label>
      <label>Description <input name="description" type="text" /></label>
      <button type="submit">Add transaction</button>
    </form>

    <section class="card">
      <table>
        <thead><tr><th>ID</th><th>Type</th><th class="amount">Amount</th><th>Description</th></tr></thead>
        <tbody>
{{ROWS}}
        </tbody>
      </table>
    </section>

    <section class="card">
      <button id="summarize-btn" type="button">Summarize</button>
      <div id="summary" class="panel hidden">
        <div><span class="label">Income</span><span id="income-total" class="value"></span></div>
        <div><span class="label">Expenses</span><span id="expense-total" class="value"></span></div>
        <div><span class="label">Net flow</span><span id="net-flow" class="value"></span></div>
      </div>
    </section>
  </main>

  <script src="/static/script.js"></script>
</body>
</html>
"#;

/// Browser rendition of [`crate::widget::SummaryWidget`], served at
/// `/static/script.js`.
pub const WIDGET_SCRIPT: &str = r#"document.addEventListener('DOMContentLoaded', () => {
  const lookup = (id) => {
    const el = document.getElementById(id);
    if (!el) {
      throw new Error(`summary widget: missing element #${id}`);
    }
    return el;
  };

  const trigger = lookup('summarize-btn');
  const container = lookup('summary');
  const incomeEl = lookup('income-total');
  const expenseEl = lookup('expense-total');
  const netEl = lookup('net-flow');

  const fixed = (value) => {
    if (typeof value !== 'number' || !Number.isFinite(value)) {
      throw new Error('summary response is missing a numeric field');
    }
    return value.toFixed(2);
  };

  trigger.addEventListener('click', async () => {
    try {
      const res = await fetch('/api/summary');
      if (!res.ok) {
        throw new Error(`unexpected status ${res.status}`);
      }
      const data = await res.json();
      const texts = [fixed(data.IncomeTotal), fixed(data.ExpenseTotal), fixed(data.NetFlow)];
      [incomeEl.textContent, expenseEl.textContent, netEl.textContent] = texts;
      container.classList.remove('hidden');
    } catch (err) {
      console.error('Error fetching summary:', err);
      alert('Error fetching summary. Please try again.');
    }
  });
});
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use crate::widget::dom::SUMMARY_ELEMENT_IDS;

    #[test]
    fn index_carries_every_widget_element() {
        let html = render_index(&[]);
        for id in SUMMARY_ELEMENT_IDS {
            assert!(html.contains(&format!(r#"id="{id}""#)), "missing #{id}");
        }
        assert!(html.contains(r#"id="summary" class="panel hidden""#));
        assert!(html.contains("No transactions yet."));
    }

    #[test]
    fn rows_escape_descriptions() {
        let tx = Transaction {
            id: 1,
            kind: TransactionKind::Expense,
            amount: 9.5,
            description: "<b>snacks</b> & tea".into(),
        };
        let html = render_index(&[tx]);
        assert!(html.contains("&lt;b&gt;snacks&lt;/b&gt; &amp; tea"));
        assert!(html.contains(">9.50<"));
        assert!(!html.contains("No transactions yet."));
    }

    #[test]
    fn script_uses_fixed_alert_message() {
        assert!(WIDGET_SCRIPT.contains(crate::widget::FAILURE_MESSAGE));
        assert!(WIDGET_SCRIPT.contains("/api/summary"));
    }
}
