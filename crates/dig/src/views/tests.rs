use super::draw;
use crate::app::{App, Mode};
use crate::input::Action;
use crate::test_support::make_app;
use dig_core::{Movement, Point, Step};
use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};
use std::ops::Range;

const WIDTH: u16 = 40;
const HEIGHT: u16 = 6;

fn render(app: &mut App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn row_text(buf: &Buffer, y: u16, columns: Range<u16>) -> String {
    columns.map(|x| buf[(x, y)].symbol()).collect()
}

fn two_commits() -> App {
    let (app, _) = make_app(
        &["first", "second"],
        &[&["+add", "-del", " ctx"], &["+other"]],
        Point::new(HEIGHT as usize, WIDTH as usize),
        10,
    );
    app
}

#[test]
fn test_draws_side_gutter_and_detail() {
    let mut app = two_commits();
    let buf = render(&mut app, WIDTH, HEIGHT);

    assert_eq!(row_text(&buf, 0, 0..10), "first     ");
    assert_eq!(row_text(&buf, 1, 0..10), "second    ");
    for y in 0..HEIGHT - 1 {
        assert_eq!(buf[(10, y)].symbol(), "│");
    }
    assert_eq!(row_text(&buf, 0, 11..15), "+add");
    assert_eq!(row_text(&buf, 1, 11..15), "-del");
    assert_eq!(row_text(&buf, 2, 11..15), " ctx");
}

#[test]
fn test_diff_lines_colored_by_kind() {
    let mut app = two_commits();
    let buf = render(&mut app, WIDTH, HEIGHT);

    assert_eq!(buf[(11, 0)].fg, Color::Green);
    assert_eq!(buf[(12, 0)].fg, Color::Green);
    assert_eq!(buf[(11, 1)].fg, Color::Red);
    assert_eq!(buf[(12, 2)].fg, Color::Reset);
}

#[test]
fn test_selected_row_padded_to_side_width() {
    let mut app = two_commits();
    let buf = render(&mut app, WIDTH, HEIGHT);

    for x in 0..10 {
        assert_eq!(buf[(x, 0)].bg, Color::Green, "column {x}");
    }
    // short unselected rows are not padded
    assert_eq!(buf[(0, 1)].bg, Color::Reset);
    assert_eq!(buf[(9, 1)].bg, Color::Reset);

    app.handle(Action::Move(Movement::Forward(Step::Line)));
    let buf = render(&mut app, WIDTH, HEIGHT);
    assert_eq!(buf[(9, 1)].bg, Color::Green);
    assert_eq!(buf[(9, 0)].bg, Color::Reset);
    assert_eq!(row_text(&buf, 0, 11..17), "+other");
}

#[test]
fn test_detail_fetched_once_across_draws() {
    let (mut app, fetches) = make_app(
        &["a", "b"],
        &[&["+x"], &["+y"]],
        Point::new(HEIGHT as usize, WIDTH as usize),
        10,
    );
    for _ in 0..3 {
        render(&mut app, WIDTH, HEIGHT);
    }
    assert_eq!(fetches.get(), 1);

    app.handle(Action::Move(Movement::Last));
    render(&mut app, WIDTH, HEIGHT);
    render(&mut app, WIDTH, HEIGHT);
    assert_eq!(fetches.get(), 2);
}

#[test]
fn test_failed_fetch_draws_empty_detail() {
    let (mut app, _) = make_app(
        &["broken"],
        &[],
        Point::new(HEIGHT as usize, WIDTH as usize),
        10,
    );
    let buf = render(&mut app, WIDTH, HEIGHT);
    for y in 0..HEIGHT - 1 {
        assert_eq!(row_text(&buf, y, 11..WIDTH).trim(), "");
    }
    assert_eq!(row_text(&buf, 0, 0..6), "broken");
}

#[test]
fn test_horizontal_scroll_shifts_detail() {
    let (mut app, _) = make_app(
        &["only"],
        &[&["0123456789"]],
        Point::new(HEIGHT as usize, WIDTH as usize),
        10,
    );
    app.horizontal_step = 4;
    render(&mut app, WIDTH, HEIGHT);
    app.handle(Action::ScrollRight);
    let buf = render(&mut app, WIDTH, HEIGHT);
    assert_eq!(row_text(&buf, 0, 11..18), "456789 ");
}

#[test]
fn test_detail_scrolls_vertically() {
    let body: Vec<String> = (0..20).map(|i| format!("line {i}")).collect();
    let refs: Vec<&str> = body.iter().map(String::as_str).collect();
    let (mut app, _) = make_app(
        &["only"],
        &[&refs],
        Point::new(HEIGHT as usize, WIDTH as usize),
        10,
    );
    render(&mut app, WIDTH, HEIGHT);
    app.handle(Action::ToggleFocus);
    app.handle(Action::Move(Movement::Forward(Step::Page)));
    let buf = render(&mut app, WIDTH, HEIGHT);
    assert_eq!(row_text(&buf, 0, 11..17), "line 5");
    assert_eq!(row_text(&buf, 4, 11..17), "line 9");
}

#[test]
fn test_status_shows_position() {
    let mut app = two_commits();
    let buf = render(&mut app, WIDTH, HEIGHT);
    let status = HEIGHT - 1;
    assert_eq!(row_text(&buf, status, 37..40), "1/2");
    assert_eq!(row_text(&buf, status, 0..8), "q: quit,");
    assert_eq!(buf[(0, status)].bg, Color::White);
    assert_eq!(buf[(39, status)].bg, Color::White);
}

#[test]
fn test_status_shows_find_prompt() {
    let mut app = two_commits();
    app.handle(Action::StartFind);
    for ch in "zzz".chars() {
        app.handle(Action::FindPush(ch));
    }
    let buf = render(&mut app, WIDTH, HEIGHT);
    assert_eq!(app.session.mode, Mode::Find);
    assert_eq!(row_text(&buf, HEIGHT - 1, 0..9), "find: zzz");
    assert_eq!(row_text(&buf, HEIGHT - 1, 9..WIDTH).trim(), "");

    app.handle(Action::FindConfirm);
    let buf = render(&mut app, WIDTH, HEIGHT);
    assert_eq!(
        row_text(&buf, HEIGHT - 1, 0..WIDTH).trim_end(),
        "find: zzz  (no match)"
    );
}

#[test]
fn test_hidden_side_gives_detail_full_width() {
    let mut app = two_commits();
    app.handle(Action::ToggleSide);
    let buf = render(&mut app, WIDTH, HEIGHT);
    assert_eq!(row_text(&buf, 0, 0..4), "+add");
    assert_eq!(row_text(&buf, 0, 4..WIDTH).trim(), "");
}

#[test]
fn test_draw_follows_terminal_size() {
    let (mut app, _) = make_app(&["a"], &[&["+x"]], Point::new(24, 80), 10);
    render(&mut app, WIDTH, HEIGHT);
    assert_eq!(app.screen.layout.size(), Point::new(6, 40));
    assert_eq!(
        app.screen.detail.window.bound().size,
        Point::new(5, 29)
    );
}

#[test]
fn test_wide_titles_clip_at_side_edge() {
    let (mut app, _) = make_app(
        &["日本語のタイトル"],
        &[&["+x"]],
        Point::new(HEIGHT as usize, WIDTH as usize),
        9,
    );
    let buf = render(&mut app, WIDTH, HEIGHT);
    assert_eq!(buf[(0, 0)].symbol(), "日");
    assert_eq!(buf[(6, 0)].symbol(), "の");
    // the fifth character needs columns 8 and 9 but the side ends at 9
    assert_eq!(buf[(8, 0)].symbol(), " ");
    assert_eq!(buf[(8, 0)].bg, Color::Green);
    assert_eq!(buf[(9, 0)].symbol(), "│");
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = two_commits();
    render(&mut app, 3, 1);
    render(&mut app, 1, 2);
    render(&mut app, WIDTH, HEIGHT);
    assert_eq!(app.screen.layout.size(), Point::new(6, 40));
}
