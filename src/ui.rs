pub fn render_index(date: &str) -> String {
    INDEX_HTML.replace("{{DATE}}", date)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Member Desk</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap');

    :root {
      --bg: #10141c;
      --panel: #1a2130;
      --panel-soft: #222b3d;
      --ink: #e8ecf4;
      --ink-dim: #8a94a8;
      --line: #2d3850;
      --accent: #8de05a;
      --warn: #f5b84a;
      --bad: #f0614f;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Inter", "Segoe UI", sans-serif;
      padding: 36px 20px 56px;
      display: flex;
      justify-content: center;
    }

    .desk {
      width: min(980px, 100%);
      display: grid;
      gap: 22px;
    }

    header {
      display: flex;
      align-items: baseline;
      justify-content: space-between;
      gap: 16px;
      flex-wrap: wrap;
    }

    header h1 {
      margin: 0;
      font-size: 1.55rem;
      font-weight: 700;
      letter-spacing: 0.01em;
    }

    header .date {
      color: var(--ink-dim);
      font-size: 0.92rem;
    }

    .summary {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 12px;
    }

    .chip {
      background: var(--panel);
      border: 1px solid var(--line);
      border-radius: 14px;
      padding: 14px 16px;
      display: grid;
      gap: 6px;
    }

    .chip .label {
      color: var(--ink-dim);
      font-size: 0.78rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
    }

    .chip .value {
      font-size: 1.6rem;
      font-weight: 600;
      font-variant-numeric: tabular-nums;
    }

    nav {
      display: flex;
      gap: 8px;
      flex-wrap: wrap;
    }

    nav button {
      appearance: none;
      border: 1px solid var(--line);
      background: var(--panel);
      color: var(--ink-dim);
      border-radius: 999px;
      padding: 8px 18px;
      font: inherit;
      font-size: 0.9rem;
      cursor: pointer;
      transition: color 140ms ease, border-color 140ms ease;
    }

    nav button:hover {
      color: var(--ink);
    }

    nav button.active {
      color: #10141c;
      background: var(--accent);
      border-color: var(--accent);
      font-weight: 600;
    }

    .board {
      background: var(--panel);
      border: 1px solid var(--line);
      border-radius: 16px;
      overflow: hidden;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.92rem;
    }

    thead th {
      text-align: left;
      padding: 12px 18px;
      background: var(--panel-soft);
      color: var(--ink-dim);
      font-weight: 500;
      font-size: 0.78rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
    }

    tbody td {
      padding: 12px 18px;
      border-top: 1px solid var(--line);
    }

    tbody tr:hover {
      background: rgba(141, 224, 90, 0.05);
    }

    .pill {
      display: inline-block;
      padding: 2px 10px;
      border-radius: 999px;
      font-size: 0.8rem;
      border: 1px solid var(--line);
      color: var(--ink-dim);
    }

    .pill.active {
      color: var(--accent);
      border-color: rgba(141, 224, 90, 0.5);
    }

    .notice {
      padding: 26px 18px;
      text-align: center;
      color: var(--ink-dim);
    }

    .notice.error {
      color: var(--bad);
    }

    #status {
      min-height: 1.2em;
      font-size: 0.86rem;
      color: var(--ink-dim);
    }

    #status.error {
      color: var(--bad);
    }
  </style>
</head>
<body>
  <main class="desk">
    <header>
      <h1>Member Desk</h1>
      <span class="date">as of {{DATE}}</span>
    </header>

    <section class="summary" id="summary">
      <div class="chip"><span class="label">New this month</span><span class="value" data-bucket="monthlyJoined">–</span></div>
      <div class="chip"><span class="label">Due in 0–3 days</span><span class="value" data-bucket="expiringIn3Days">–</span></div>
      <div class="chip"><span class="label">Due in 4–7 days</span><span class="value" data-bucket="expiringIn4to7Days">–</span></div>
      <div class="chip"><span class="label">Expired</span><span class="value" data-bucket="expired">–</span></div>
      <div class="chip"><span class="label">Inactive</span><span class="value" data-bucket="inactive">–</span></div>
    </section>

    <nav id="tabs">
      <button data-category="monthlyJoined" class="active">New this month</button>
      <button data-category="expiringIn3Days">Due in 0–3 days</button>
      <button data-category="expiringIn4to7Days">Due in 4–7 days</button>
      <button data-category="expired">Expired</button>
      <button data-category="inactive">Inactive</button>
    </nav>

    <section class="board">
      <table>
        <thead>
          <tr><th>Member</th><th>ID</th><th>Joined</th><th>Next bill</th><th>Status</th></tr>
        </thead>
        <tbody id="rows"></tbody>
      </table>
      <div class="notice" id="notice" hidden></div>
    </section>

    <p id="status"></p>
  </main>

  <script>
    const rows = document.getElementById('rows');
    const notice = document.getElementById('notice');
    const status = document.getElementById('status');
    const tabs = Array.from(document.querySelectorAll('#tabs button'));

    const setStatus = (text, kind) => {
      status.textContent = text;
      status.className = kind === 'error' ? 'error' : '';
    };

    const showNotice = (text, isError) => {
      rows.innerHTML = '';
      notice.hidden = false;
      notice.textContent = text;
      notice.className = isError ? 'notice error' : 'notice';
    };

    const cell = (value) => {
      const td = document.createElement('td');
      td.textContent = value == null || value === '' ? '—' : value;
      return td;
    };

    const renderMembers = (members) => {
      if (members.length === 0) {
        showNotice('No members in this bucket.', false);
        return;
      }
      notice.hidden = true;
      rows.innerHTML = '';
      members.forEach((member) => {
        const tr = document.createElement('tr');
        tr.append(cell(member.name), cell(member.id), cell(member.createdAt), cell(member.nextBillDate));
        const statusTd = document.createElement('td');
        const pill = document.createElement('span');
        const label = member.status || 'unknown';
        pill.textContent = label;
        pill.className = label.toLowerCase() === 'active' ? 'pill active' : 'pill';
        statusTd.append(pill);
        tr.append(statusTd);
        rows.append(tr);
      });
    };

    const loadSummary = async () => {
      const res = await fetch('/api/summary');
      if (!res.ok) {
        throw new Error('Unable to load summary');
      }
      const data = await res.json();
      document.querySelectorAll('#summary .value').forEach((el) => {
        el.textContent = data.buckets[el.dataset.bucket];
      });
    };

    const loadCategory = async (category) => {
      const res = await fetch('/api/members/' + encodeURIComponent(category));
      if (!res.ok) {
        // A failed fetch is not the same as an empty bucket.
        showNotice('Unable to load the roster.', true);
        throw new Error(await res.text() || 'Roster fetch failed');
      }
      const data = await res.json();
      renderMembers(data.members);
    };

    const setActiveTab = (category) => {
      tabs.forEach((button) => {
        button.classList.toggle('active', button.dataset.category === category);
      });
      setStatus('Loading…', '');
      loadCategory(category)
        .then(() => setStatus('', ''))
        .catch((err) => setStatus(err.message, 'error'));
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveTab(button.dataset.category));
    });

    loadSummary().catch((err) => setStatus(err.message, 'error'));
    setActiveTab('monthlyJoined');
  </script>
</body>
</html>
"#;
