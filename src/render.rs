//! Terminal output. Widths are computed on plain strings and color is
//! applied only when printing, so alignment survives the escape codes.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use colored::*;
use unicode_width::UnicodeWidthStr;
use uuid::Uuid;

use docket::commands::search::{highlight, MatchSegment};
use docket::commands::{CmdMessage, MessageLevel, PendingTask};
use docket::index::{DisplayCase, DisplayIndex};
use docket::model::{Case, Partition};
use docket::workflow;

const LINE_WIDTH: usize = 100;
const FAV_MARKER: &str = "*";
const SELECT_MARKER: &str = "▸";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// The tab-strip view: active row, then post-live, then archived.
pub fn print_cases(cases: &[DisplayCase], active_id: Option<Uuid>) {
    if cases.is_empty() {
        println!("No cases found.");
        return;
    }

    let mut last_partition = None;
    for dc in cases {
        let partition = dc.case.partition();
        if last_partition.is_some() && last_partition != Some(partition) {
            println!();
        }
        last_partition = Some(partition);

        let selected = active_id == Some(dc.case.id);
        let marker = if selected {
            format!("{} ", SELECT_MARKER)
        } else {
            "  ".to_string()
        };
        let idx_str = format!("{}. ", dc.index);

        let mut label = if dc.case.number.is_empty() {
            dc.case.title.clone()
        } else {
            format!("{} {}", dc.case.number, dc.case.title)
        };
        if dc.case.is_favorite {
            label.push_str(&format!(" {}", FAV_MARKER));
        }

        let status = dc.case.status.label();
        let right = match dc.case.launch_date {
            Some(date) => format!("{}  {}", date.format("%Y-%m-%d"), status),
            None => status,
        };

        let fixed = marker.width() + idx_str.width() + right.width() + 2;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let label = truncate_to_width(&label, available);
        let padding = available.saturating_sub(label.width()) + 2;

        let idx_colored = match dc.index {
            DisplayIndex::Active(_) => idx_str.normal(),
            DisplayIndex::PostLive(_) => idx_str.green(),
            DisplayIndex::Archived(_) => idx_str.dimmed(),
        };
        let label_colored = if selected {
            label.bold()
        } else if partition == Partition::Archived {
            label.dimmed()
        } else {
            label.normal()
        };

        println!(
            "{}{}{}{}{}",
            marker,
            idx_colored,
            label_colored,
            " ".repeat(padding),
            right.dimmed()
        );
    }
}

/// The full single-case view: header, fields, then the child collections.
pub fn print_case_detail(dc: &DisplayCase) {
    let case = &dc.case;
    println!(
        "{} {}",
        dc.index.to_string().yellow(),
        header_label(case).bold()
    );
    println!("--------------------------------");
    println!("status: {}", case.status.label());
    println!("partition: {}", case.partition());
    if let Some(date) = case.launch_date {
        println!("launch date: {}", date.format("%Y-%m-%d"));
    }
    let flags = flag_names(case);
    if !flags.is_empty() {
        println!("flags: {}", flags.join(", "));
    }
    if !case.tags.is_empty() {
        println!("tags: {}", case.tags.join(", "));
    }

    if !case.diary.is_empty() {
        println!("\nDiary:");
        for (i, entry) in case.diary.iter().enumerate() {
            println!(
                "  {}. {} {}",
                i + 1,
                format!("({})", format_time_ago(entry.timestamp)).dimmed(),
                entry.text
            );
        }
    }
    if !case.checklist.is_empty() {
        println!("\nChecklist:");
        for (i, item) in case.checklist.iter().enumerate() {
            let tick = if item.is_done { "[x]" } else { "[ ]" };
            println!("  {} {}. {}", tick, i + 1, item.text);
        }
    }
    if !case.references.is_empty() {
        println!("\nReferences:");
        for (i, reference) in case.references.iter().enumerate() {
            let mut line = format!("  {}. {}", i + 1, reference.name);
            for (key, value) in [
                ("url", &reference.url),
                ("profile", &reference.profile),
                ("collection", &reference.collection),
                ("product-id", &reference.product_id),
            ] {
                if !value.is_empty() {
                    line.push_str(&format!("  {}={}", key, value));
                }
            }
            println!("{}", line);
        }
    }
}

/// The cross-case pending-task view, in store order.
pub fn print_tasks(tasks: &[PendingTask], listed: &[DisplayCase]) {
    if tasks.is_empty() {
        return;
    }
    let indexes: HashMap<Uuid, DisplayIndex> =
        listed.iter().map(|dc| (dc.case.id, dc.index)).collect();
    for task in tasks {
        let idx_str = indexes
            .get(&task.case_id)
            .map(|idx| format!("{}. ", idx))
            .unwrap_or_default();
        let home = format!("{}{}", idx_str, task.case_number);
        let home_colored = match task.partition {
            Partition::Active => home.normal(),
            Partition::PostLive => home.green(),
            Partition::Archived => home.dimmed(),
        };
        println!("  [ ] {}  {}", home_colored, task.text);
    }
}

/// Search results with query hits emphasized.
pub fn print_search(results: &[DisplayCase], query: &str) {
    for dc in results {
        let idx_str = format!("{}. ", dc.index);
        let idx_colored = match dc.index {
            DisplayIndex::Active(_) => idx_str.normal(),
            DisplayIndex::PostLive(_) => idx_str.green(),
            DisplayIndex::Archived(_) => idx_str.dimmed(),
        };
        print!("  {}", idx_colored);
        if !dc.case.number.is_empty() {
            print_highlighted(&dc.case.number, query);
            print!(" ");
        }
        print_highlighted(&dc.case.title, query);
        println!();
    }
}

fn print_highlighted(text: &str, query: &str) {
    for segment in highlight(text, query) {
        match segment {
            MatchSegment::Plain(s) => print!("{}", s),
            MatchSegment::Match(s) => print!("{}", s.yellow().bold()),
        }
    }
}

/// The status ladder, one line per status with its group number.
pub fn print_statuses() {
    for (group, statuses) in workflow::GROUPS {
        for status in *statuses {
            println!("{}  {}", format!("{:>2}", group).dimmed(), status.name());
        }
    }
}

fn header_label(case: &Case) -> String {
    let mut label = if case.number.is_empty() {
        case.title.clone()
    } else {
        format!("{} {}", case.number, case.title)
    };
    if case.is_favorite {
        label.push_str(&format!(" {}", FAV_MARKER));
    }
    label
}

fn flag_names(case: &Case) -> Vec<&'static str> {
    let mut names = Vec::new();
    for (set, name) in [
        (case.is_special_project, "special-project"),
        (case.can_launch_sooner, "can-launch-sooner"),
        (case.is_reopened, "reopened"),
        (case.is_content_automated, "content-automated"),
    ] {
        if set {
            names.push(name);
        }
    }
    names
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}
