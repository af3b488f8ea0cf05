//! Tests for banner rendering

use super::*;
use crate::style::{AnimationType, BannerStyle, IncludedStyle, ProgressBarPosition, ProgressBarStyle};
use insta::assert_snapshot;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier};

fn render_banner(banner: &StatusBarView, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| f.render_widget(banner, f.area()))
        .unwrap();
    terminal.backend().buffer().clone()
}

fn row(buf: &Buffer, y: u16) -> String {
    let line: String = (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect();
    format!("|{}|", line)
}

fn shown(style: BannerStyle, text: &str) -> StatusBarView {
    let mut banner = StatusBarView::new(style, text);
    banner.set_visibility(1.0);
    banner
}

#[test]
fn snapshot_centered_banner() {
    let banner = shown(BannerStyle::default(), "Saved");
    let buf = render_banner(&banner, 11, 3);
    assert_snapshot!(row(&buf, 0), @"|   Saved   |");
    assert_snapshot!(row(&buf, 1), @"|           |");
}

#[test]
fn snapshot_left_aligned_banner() {
    let banner = shown(
        BannerStyle::default().with_alignment(Alignment::Left),
        "Saved",
    );
    let buf = render_banner(&banner, 11, 2);
    assert_snapshot!(row(&buf, 0), @"|Saved      |");
}

#[test]
fn snapshot_right_aligned_banner() {
    let banner = shown(
        BannerStyle::default().with_alignment(Alignment::Right),
        "Saved",
    );
    let buf = render_banner(&banner, 11, 2);
    assert_snapshot!(row(&buf, 0), @"|      Saved|");
}

#[test]
fn snapshot_long_text_is_truncated() {
    let banner = shown(BannerStyle::default(), "Uploading files");
    let buf = render_banner(&banner, 10, 2);
    assert_snapshot!(row(&buf, 0), @"|Uploading…|");
}

#[test]
fn snapshot_activity_indicator() {
    let mut banner = shown(BannerStyle::default(), "Saved");
    banner.set_activity_indicator(true);
    let buf = render_banner(&banner, 11, 2);
    assert_snapshot!(row(&buf, 0), @"|  ⠋ Saved  |");
}

#[test]
fn snapshot_progress_bar_on_its_own_row() {
    let mut banner = shown(BannerStyle::default().with_height(2), "Saved");
    banner.set_progress(Some(0.5));
    let buf = render_banner(&banner, 10, 3);
    assert_snapshot!(row(&buf, 0), @"|  Saved   |");
    assert_snapshot!(row(&buf, 1), @"|▀▀▀▀▀     |");
}

#[test]
fn test_progress_bar_tints_single_row_banner() {
    let style = BannerStyle::default().with_progress_bar(ProgressBarStyle {
        color: Color::Cyan,
        position: ProgressBarPosition::Top,
        ..ProgressBarStyle::default()
    });
    let mut banner = shown(style.clone(), "Saved");
    banner.set_progress(Some(0.5));
    let buf = render_banner(&banner, 10, 2);

    assert_eq!(row(&buf, 0), "|  Saved   |", "text must survive the bar");
    for x in 0..5 {
        assert_eq!(buf[(x, 0)].bg, Color::Cyan);
    }
    for x in 5..10 {
        assert_eq!(buf[(x, 0)].bg, style.background);
    }
}

#[test]
fn test_banner_uses_style_colors() {
    let style = IncludedStyle::Error.style();
    let banner = shown(style.clone(), "Failed");
    let buf = render_banner(&banner, 12, 2);

    let cell = &buf[(3, 0)];
    assert_eq!(cell.symbol(), "F");
    assert_eq!(cell.fg, style.text_color);
    assert_eq!(cell.bg, style.background);
    assert!(cell.modifier.contains(Modifier::BOLD));
    assert_eq!(buf[(0, 1)].bg, Color::Reset, "content below is untouched");
}

#[test]
fn test_hidden_banner_draws_nothing() {
    let banner = StatusBarView::new(BannerStyle::default(), "Saved");
    let buf = render_banner(&banner, 10, 2);
    assert_eq!(row(&buf, 0), "|          |");
    assert_eq!(buf[(0, 0)].bg, Color::Reset);
}

#[test]
fn test_sliding_banner_reveals_bottom_rows_first() {
    let style = BannerStyle::default()
        .with_height(2)
        .with_animation(AnimationType::Move);
    let mut banner = StatusBarView::new(style.clone(), "Saved");
    banner.set_visibility(0.5);
    let buf = render_banner(&banner, 10, 3);

    assert_eq!(row(&buf, 0), "|          |", "text row still above the edge");
    assert_eq!(buf[(0, 0)].bg, style.background);
    assert_eq!(buf[(0, 1)].bg, Color::Reset);
}

#[test]
fn snapshot_tall_banner_in_short_terminal_keeps_text() {
    let mut banner = shown(BannerStyle::default().with_height(3), "Saved");
    banner.set_progress(Some(0.5));
    let buf = render_banner(&banner, 11, 1);
    assert_snapshot!(row(&buf, 0), @"|   Saved   |");
}

#[test]
fn test_fading_banner_is_dimmed_until_fully_visible() {
    let style = BannerStyle::default().with_animation(AnimationType::Fade);
    let mut banner = StatusBarView::new(style, "Saved");
    banner.set_visibility(0.4);
    let buf = render_banner(&banner, 11, 2);
    assert!(buf[(3, 0)].modifier.contains(Modifier::DIM));

    banner.set_visibility(1.0);
    let buf = render_banner(&banner, 11, 2);
    assert!(!buf[(3, 0)].modifier.contains(Modifier::DIM));
}

#[test]
fn test_truncate_to_width() {
    assert_eq!(truncate_to_width("short", 10), "short");
    assert_eq!(truncate_to_width("exactly10!", 10), "exactly10!");
    assert_eq!(truncate_to_width("abcdef", 4), "abc…");
    assert_eq!(truncate_to_width("abc", 0), "");
}

#[test]
fn test_truncate_respects_wide_characters() {
    // Each CJK character is two columns wide
    assert_eq!(truncate_to_width("日本語テキスト", 6), "日本…");
}
