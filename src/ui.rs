use crate::calendar::{self, MonthLabel, Week};
use crate::models::Contribution;

/// Renders the portfolio page with the contribution graph already laid out:
/// week-aligned columns, month labels, intensity classes, and tooltip text
/// are all computed server-side; the embedded script only positions the
/// floating tooltip.
pub fn render_page(history: &[Contribution]) -> String {
    let weeks = calendar::align_weeks(history);
    let labels = calendar::month_labels(&weeks);

    PAGE_HTML
        .replace("{{RANGE}}", calendar::range_heading(history.len()))
        .replace("{{MONTHS}}", &render_month_row(weeks.len(), &labels))
        .replace("{{GRID}}", &render_grid(&weeks))
}

fn render_month_row(week_count: usize, labels: &[MonthLabel]) -> String {
    let mut row = String::new();
    for index in 0..week_count {
        let label = labels
            .iter()
            .find(|label| label.week == index)
            .map(|label| format!("<span>{}</span>", label.label))
            .unwrap_or_default();
        row.push_str(&format!("<div class=\"month-slot\">{label}</div>"));
    }
    row
}

fn render_grid(weeks: &[Week]) -> String {
    let mut grid = String::new();
    for week in weeks {
        grid.push_str("<div class=\"week\">");
        for cell in week {
            match cell {
                Some(day) => {
                    let bucket = calendar::color_bucket(day.count);
                    let tip = format!(
                        "{} Contributions on {}",
                        day.count,
                        calendar::day_label(day.date)
                    );
                    grid.push_str(&format!(
                        "<div class=\"cell level-{bucket}\" data-tip=\"{tip}\"></div>"
                    ));
                }
                None => grid.push_str("<div class=\"cell empty\"></div>"),
            }
        }
        grid.push_str("</div>");
    }
    grid
}

const PAGE_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Portfolio</title>
  <style>
    :root {
      --bg: #fafafa;
      --ink: #1f2933;
      --muted: #9aa5b1;
      --level-0: #f1f2f4;
      --level-1: #c7d2fe;
      --level-2: #a5b4fc;
      --level-3: #818cf8;
      --level-4: #4f46e5;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Helvetica Neue", Arial, sans-serif;
      display: grid;
      place-items: start center;
      padding: 48px 18px;
    }

    .page {
      width: min(760px, 100%);
      display: grid;
      gap: 32px;
    }

    .activity h2 {
      margin: 0 0 4px;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
      display: flex;
      align-items: center;
      gap: 10px;
    }

    .activity .range {
      font-size: 0.7rem;
      text-transform: none;
      letter-spacing: normal;
      padding: 2px 10px;
      border: 1px solid #e4e7eb;
      border-radius: 999px;
    }

    .scroll {
      overflow-x: auto;
      padding-bottom: 10px;
    }

    .months {
      display: flex;
      gap: 3px;
      height: 16px;
      margin-bottom: 6px;
      font-size: 11px;
      color: var(--muted);
    }

    .month-slot {
      width: 12px;
      position: relative;
      overflow: visible;
      flex: none;
    }

    .month-slot span {
      position: absolute;
      left: 0;
      top: 0;
      white-space: nowrap;
    }

    .grid {
      display: flex;
      gap: 3px;
    }

    .week {
      display: flex;
      flex-direction: column;
      gap: 3px;
    }

    .cell {
      width: 12px;
      height: 12px;
      border-radius: 2px;
      background: var(--level-0);
      flex: none;
    }

    .cell.empty {
      background: transparent;
    }

    .cell.level-1 { background: var(--level-1); }
    .cell.level-2 { background: var(--level-2); }
    .cell.level-3 { background: var(--level-3); }
    .cell.level-4 { background: var(--level-4); }

    .cell[data-tip] {
      cursor: pointer;
      transition: transform 120ms ease;
    }

    .cell[data-tip]:hover {
      transform: scale(1.25);
    }

    .legend {
      display: flex;
      align-items: center;
      gap: 6px;
      margin-top: 8px;
      font-size: 11px;
      color: var(--muted);
    }

    .legend .cell {
      cursor: default;
    }

    #tooltip {
      position: fixed;
      transform: translate(-50%, -100%);
      background: var(--ink);
      color: white;
      font-size: 12px;
      font-weight: 600;
      padding: 5px 10px;
      border-radius: 6px;
      pointer-events: none;
      white-space: nowrap;
      opacity: 0;
      transition: opacity 120ms ease;
      z-index: 50;
    }

    #tooltip.visible {
      opacity: 1;
    }
  </style>
</head>
<body>
  <main class="page">
    <section class="activity">
      <h2>Git Activity <span class="range">{{RANGE}}</span></h2>
      <div class="scroll">
        <div class="months">{{MONTHS}}</div>
        <div class="grid">{{GRID}}</div>
      </div>
      <div class="legend">
        <span>Less</span>
        <div class="cell level-0"></div>
        <div class="cell level-1"></div>
        <div class="cell level-2"></div>
        <div class="cell level-3"></div>
        <div class="cell level-4"></div>
        <span>More</span>
      </div>
    </section>
  </main>

  <div id="tooltip"></div>

  <script>
    const tooltip = document.getElementById('tooltip');

    document.querySelectorAll('.grid .cell[data-tip]').forEach((cell) => {
      cell.addEventListener('mouseenter', () => {
        const rect = cell.getBoundingClientRect();
        tooltip.textContent = cell.dataset.tip;
        tooltip.style.left = (rect.left + rect.width / 2) + 'px';
        tooltip.style.top = (rect.top - 8) + 'px';
        tooltip.classList.add('visible');
      });
      cell.addEventListener('mouseleave', () => {
        tooltip.classList.remove('visible');
      });
    });
  </script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn sample(len: usize) -> Vec<Contribution> {
        // 2024-03-31 is a Sunday, so the grid starts with a full column.
        let start = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        (0..len)
            .map(|offset| Contribution {
                date: start + Duration::days(offset as i64),
                count: (offset % 8) as u32,
            })
            .collect()
    }

    #[test]
    fn page_contains_one_cell_per_day() {
        let history = sample(28);
        let page = render_page(&history);
        assert_eq!(page.matches("data-tip=").count(), 28);
        assert!(page.contains("Last 6 Months"));
    }

    #[test]
    fn padding_cells_are_not_interactive() {
        // 2024-01-03 is a Wednesday: three leading empty cells.
        let start = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let history: Vec<Contribution> = (0..7)
            .map(|offset| Contribution {
                date: start + Duration::days(offset),
                count: 1,
            })
            .collect();
        let page = render_page(&history);
        assert_eq!(page.matches("cell empty").count(), 3);
        assert_eq!(page.matches("data-tip=").count(), 7);
    }

    #[test]
    fn tooltip_text_matches_format() {
        let history = vec![Contribution {
            date: NaiveDate::from_ymd_opt(2024, 8, 21).unwrap(),
            count: 3,
        }];
        let page = render_page(&history);
        assert!(page.contains("3 Contributions on 21st Aug"));
    }

    #[test]
    fn month_labels_appear_in_the_header_row() {
        let history = sample(62);
        let page = render_page(&history);
        assert!(page.contains("<span>Mar</span>"));
        assert!(page.contains("<span>Apr</span>"));
        assert!(page.contains("<span>May</span>"));
    }

    #[test]
    fn zero_count_maps_to_lowest_level() {
        let history = vec![Contribution {
            date: NaiveDate::from_ymd_opt(2024, 8, 21).unwrap(),
            count: 0,
        }];
        let page = render_page(&history);
        assert!(page.contains(r#"cell level-0" data-tip"#));
    }
}
