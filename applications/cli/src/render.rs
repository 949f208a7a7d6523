//! Plain-text rendering of pages
//!
//! Every function returns the full text so commands only print it.

use crate::recite::QueuedVerse;
use std::fmt::Write;
use tilawah_core::{
    sample,
    types::{average_active_month, yearly_total},
    Chapter, ProgressEntry, ReadingGoals, TrackingMode, UserSession, Verse, CHAPTER_COUNT,
};

const BAR_WIDTH: usize = 20;

fn bar(percent: u32) -> String {
    let filled = (percent.min(100) as usize * BAR_WIDTH) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

pub fn chapter_list(chapters: &[Chapter]) -> String {
    let mut out = String::new();
    for chapter in chapters {
        let _ = writeln!(
            out,
            "{:>3}. {:<20} {:<28} {:>3} verses  {}",
            chapter.number,
            chapter.transliterated_name,
            chapter.translated_name,
            chapter.verse_count,
            chapter.revelation_place
        );
    }
    out
}

pub fn chapter_header(chapter: &Chapter) -> String {
    format!(
        "{} ({})\n{} - {} - {} verses\n",
        chapter.transliterated_name,
        chapter.arabic_name,
        chapter.translated_name,
        chapter.revelation_place,
        chapter.verse_count
    )
}

pub fn chapter_page(chapter: &Chapter, verses: &[Verse]) -> String {
    let mut out = chapter_header(chapter);
    out.push('\n');
    for verse in verses {
        let _ = writeln!(
            out,
            "{:>3}  {}\n     page {} | juz {}",
            verse.number_in_chapter, verse.text, verse.page_number, verse.juz_index
        );
        if let Some(url) = verse.audio_url.as_deref().filter(|u| !u.is_empty()) {
            let _ = writeln!(out, "     audio {}", url);
        }
    }
    out
}

pub fn recitation_queue(chapter: &Chapter, queue: &[QueuedVerse]) -> String {
    let mut out = format!("Recitation of {}\n", chapter.transliterated_name);
    for item in queue {
        let _ = writeln!(out, "  {:>3}  {}", item.verse_number, item.audio_url);
    }
    out
}

pub fn progress_entry(entry: &ProgressEntry, chapter: &Chapter) -> String {
    let mode = match entry.mode {
        TrackingMode::Reading => "Reading",
        TrackingMode::Memorization => "Memorization",
    };
    format!(
        "{} logged for {}: {} up to verse {} of {}\n",
        mode,
        entry.date,
        chapter.transliterated_name,
        entry.last_verse,
        chapter.verse_count
    )
}

pub fn dashboard(session: &UserSession, goals: &ReadingGoals) -> String {
    let mut out = String::new();

    let initial = session.avatar_initial().unwrap_or('?');
    let _ = writeln!(out, "({}) Assalamu'alaikum, {}\n", initial, session.first_name());

    // Progress cards
    let overview = sample::progress_overview();
    for (title, percent, subtitle) in [
        ("Reading", overview.reading_percent, &overview.reading_subtitle),
        (
            "Memorization",
            overview.memorization_percent,
            &overview.memorization_subtitle,
        ),
        (
            "Daily target",
            overview.daily_target_percent,
            &overview.daily_target_subtitle,
        ),
    ] {
        let _ = writeln!(out, "{:<13} {} {:>3}%  {}", title, bar(percent), percent, subtitle);
    }

    // Weekly reading
    let week = sample::weekly_pages();
    let week_total: u32 = week.iter().map(|d| d.pages).sum();
    let _ = writeln!(out, "\nThis week");
    for day in &week {
        let _ = writeln!(out, "  {} {:>2} {}", day.day, day.pages, "#".repeat(day.pages as usize));
    }
    let _ = writeln!(
        out,
        "  {} pages, {:.1} per day",
        week_total,
        f64::from(week_total) / week.len() as f64
    );

    // Memorized chapters
    let memorized = sample::memorized_chapters();
    let _ = writeln!(
        out,
        "\nMemorized chapters ({} of {})",
        memorized.iter().filter(|c| c.is_memorized).count(),
        CHAPTER_COUNT
    );
    for chapter in &memorized {
        let _ = writeln!(out, "  {} ({} verses)", chapter.name, chapter.verse_count);
    }

    // Statistics
    let stats = sample::reading_stats();
    let months = sample::monthly_pages();
    let _ = writeln!(out, "\nStatistics");
    let _ = writeln!(out, "  Total pages        {}", stats.total_pages);
    let _ = writeln!(
        out,
        "  This month         {} ({:+}% vs last month)",
        stats.pages_this_month,
        stats.monthly_change_percent()
    );
    let _ = writeln!(out, "  Daily average      {:.1}", stats.average_daily_pages);
    let _ = writeln!(
        out,
        "  Streak             {} of {} days {}",
        stats.current_streak,
        stats.longest_streak,
        bar(stats.streak_percent())
    );
    let _ = writeln!(
        out,
        "  This year          {} pages, {} per active month",
        yearly_total(&months),
        average_active_month(&months)
    );

    let _ = writeln!(out, "\nChapter completion");
    for row in sample::chapter_completion() {
        let _ = writeln!(
            out,
            "  {:<12} {} {}x  {}",
            row.name,
            bar(row.completion_percent()),
            row.read_count,
            row.last_read
        );
    }

    // Goals
    let _ = writeln!(out, "\nGoals");
    let _ = writeln!(out, "  {} pages a day", goals.daily_pages);
    let _ = writeln!(out, "  {} pages a week", goals.weekly_pages);
    let _ = writeln!(out, "  {} juz to memorize", goals.memorization_target);

    out
}
