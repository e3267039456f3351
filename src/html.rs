//! Markup assembly for the schedule report.
//!
//! The generated page is fully self-contained: styles and the filtering
//! script are embedded inline and nothing is fetched at view time. Every
//! date section, studio section, and class row carries `data-*` attributes
//! with its own display values so the script can match them against the
//! dropdown selections without re-reading visible text.

use crate::models::ScheduleRow;
use crate::report::{DateGroup, FilterOptions, StudioGroup};

/// Escapes text for element content and double-quoted attribute values.
/// Applied exactly once per value, so the attribute a browser decodes is
/// equal to the raw display string the dropdown option carries.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

const STYLE: &str = r#"
:root { color-scheme: light dark; }
* { box-sizing: border-box; }
body {
  font-family: system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial, sans-serif;
  margin: 16px;
}
.controls {
  display: grid;
  grid-template-columns: repeat(4, minmax(0, 1fr));
  gap: 12px;
  margin-bottom: 16px;
}
.controls label {
  display: block;
  font-size: 13px;
  font-weight: 600;
  margin-bottom: 4px;
}
select, button {
  width: 100%;
  padding: 8px 10px;
  border: 1px solid #e3e3e3;
  border-radius: 10px;
  background: #fff;
  font-size: 14px;
}
button { cursor: pointer; }
.section-date { font-weight: 800; font-size: 18px; margin: 20px 0 10px; }
.section-studio { font-weight: 700; font-size: 16px; margin: 12px 0 8px; opacity: .9; }
.box {
  border: 1px solid #eaeaea;
  border-radius: 12px;
  padding: 8px;
  margin: 8px 0 16px;
  box-shadow: 0 1px 2px rgba(0,0,0,.04);
  background: #fff;
}
.hidden { display: none !important; }
table.mini { width: 100%; border-collapse: collapse; font-size: 14px; }
.mini th, .mini td { padding: 8px 6px; border-bottom: 1px solid #f0f0f0; text-align: left; }
.mini thead { background: #fafafa; position: sticky; top: 0; }
.mini tr:last-child td { border-bottom: none; }
.badge { font-size: 12px; opacity: .65; margin-left: 6px; }
@media (max-width: 740px) {
  .controls { grid-template-columns: 1fr 1fr; }
}
@media (max-width: 640px) {
  .mini thead { display: none; }
  .mini, .mini tbody, .mini tr, .mini td { display: block; width: 100%; }
  .mini tr {
    border: 1px solid #eee;
    border-radius: 10px;
    padding: 8px;
    margin: 8px 0;
    box-shadow: 0 1px 2px rgba(0,0,0,.03);
    background: #fff;
  }
  .mini td { border: none; padding: 4px 0; }
  .mini td::before {
    display: inline-block;
    min-width: 110px;
    font-weight: 600;
    opacity: .7;
    margin-right: .5rem;
  }
  .mini td:nth-child(1)::before { content: "Time"; }
  .mini td:nth-child(2)::before { content: "Instructor"; }
  .mini td:nth-child(3)::before { content: "Type"; }
  .mini td:nth-child(4)::before { content: "Location"; }
}
"#;

// Runs once on load and again on every change event. A row stays visible
// only when all three selections match its data attributes; studio and date
// sections hide once they have nothing visible left, and the studio badge
// tracks the visible row count rather than the total.
const SCRIPT: &str = r##"
(function () {
  const $ = (sel, root = document) => root.querySelector(sel);
  const $$ = (sel, root = document) => Array.from(root.querySelectorAll(sel));

  const fDate = $("#filter-date");
  const fStudio = $("#filter-studio");
  const fInstructor = $("#filter-instructor");
  const clearBtn = $("#clear-filters");

  function matches(value, filterValue) {
    return !filterValue || value === filterValue;
  }

  function applyFilters() {
    const date = fDate.value;
    const studio = fStudio.value;
    const instructor = fInstructor.value;

    $$(".class-row").forEach(row => {
      const ok = matches(row.dataset.date, date)
        && matches(row.dataset.studio, studio)
        && matches(row.dataset.instructor, instructor);
      row.classList.toggle("hidden", !ok);
    });

    $$(".studio-section").forEach(section => {
      const visible = $$(".class-row:not(.hidden)", section);
      section.classList.toggle("hidden", visible.length === 0);
      const badge = $("[data-count]", section);
      if (badge) badge.textContent = `(${visible.length})`;
    });

    $$(".date-section").forEach(section => {
      const visible = $$(".studio-section:not(.hidden)", section);
      section.classList.toggle("hidden", visible.length === 0);
    });
  }

  [fDate, fStudio, fInstructor].forEach(el => el.addEventListener("change", applyFilters));
  clearBtn.addEventListener("click", () => {
    fDate.value = "";
    fStudio.value = "";
    fInstructor.value = "";
    applyFilters();
  });

  applyFilters();
})();
"##;

fn options_markup(values: &[String]) -> String {
    let mut out = String::from("<option value=\"\">All</option>");
    for value in values {
        let escaped = escape(value);
        out.push_str(&format!(
            "<option value=\"{escaped}\">{escaped}</option>"
        ));
    }
    out
}

fn controls_markup(options: &FilterOptions) -> String {
    format!(
        r#"<div class="controls">
<div class="filter-col">
<label for="filter-date">Date</label>
<select id="filter-date">{dates}</select>
</div>
<div class="filter-col">
<label for="filter-studio">Studio</label>
<select id="filter-studio">{studios}</select>
</div>
<div class="filter-col">
<label for="filter-instructor">Instructor</label>
<select id="filter-instructor">{instructors}</select>
</div>
<div class="filter-col">
<label>&nbsp;</label>
<button id="clear-filters">Clear</button>
</div>
</div>"#,
        dates = options_markup(&options.dates),
        studios = options_markup(&options.studios),
        instructors = options_markup(&options.instructors),
    )
}

fn class_row(row: &ScheduleRow) -> String {
    format!(
        "<tr class=\"class-row\" data-date=\"{date}\" data-studio=\"{studio}\" \
         data-instructor=\"{instructor}\"><td>{time}</td><td>{instructor}</td>\
         <td>{class_type}</td><td>{location}</td></tr>\n",
        date = escape(&row.date),
        studio = escape(&row.studio),
        instructor = escape(&row.instructor),
        time = escape(&row.time),
        class_type = escape(&row.class_type),
        location = escape(&row.location),
    )
}

fn studio_section(date: &str, group: &StudioGroup) -> String {
    let date = escape(date);
    let studio = escape(&group.studio);
    let mut out = format!(
        "<div class=\"studio-section\" data-date=\"{date}\" data-studio=\"{studio}\">\n\
         <div class=\"section-studio\">{studio}<span class=\"badge\" data-count>({count})</span></div>\n\
         <div class=\"box\">\n\
         <table class=\"mini\"><thead><tr><th>Time</th><th>Instructor</th><th>Type</th><th>Location</th></tr></thead><tbody>\n",
        count = group.rows.len(),
    );
    for row in &group.rows {
        out.push_str(&class_row(row));
    }
    out.push_str("</tbody></table>\n</div>\n</div>\n");
    out
}

fn date_section(group: &DateGroup) -> String {
    let date = escape(&group.date);
    let mut out = format!(
        "<section class=\"date-section\" data-date=\"{date}\">\n\
         <div class=\"section-date\">{date}</div>\n"
    );
    for studio in &group.studios {
        out.push_str(&studio_section(&group.date, studio));
    }
    out.push_str("</section>\n");
    out
}

/// Assembles the complete document from the grouped rows and the dropdown
/// option values.
pub fn render_document(title: &str, options: &FilterOptions, groups: &[DateGroup]) -> String {
    let mut body = String::new();
    for group in groups {
        body.push_str(&date_section(group));
    }

    format!(
        "<!doctype html><html><head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\n\
         <title>{title}</title>\n\
         <style>{STYLE}</style>\n\
         </head><body>\n\
         {controls}\n\
         {body}\
         <script>{SCRIPT}</script>\n\
         </body></html>\n",
        title = escape(title),
        controls = controls_markup(options),
    )
}
