use std::fs::File;
use std::io::{self, Write};

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent};
use crossterm::style::{self, Print, SetBackgroundColor};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use dockkit::{
    is_dark_background, Color, Control, ControlHost, ControlTree, HeadlessScrollBar, InputEvent,
    Key, RectD, ScrollBar, ScrollBarEvent, ScrollEventType, SplitPanelPosition, SplittedPanel,
    ToolkitConfig,
};
use simplelog::{Config, LevelFilter, WriteLogger};

const BACKGROUND: Color = Color::rgb(30, 30, 30);
const FOREGROUND: Color = Color::rgb(220, 220, 220);

fn main() -> io::Result<()> {
    let log_file = File::create("splitter.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    // One terminal cell is one unit.
    let config = ToolkitConfig::new()
        .splitter_width(1.0)
        .splitter_size_delta(1)
        .splitter_min_size(3.0)
        .splitter_min_extra(3.0);

    let (cols, rows) = terminal::size()?;
    let mut tree = ControlTree::new();
    let root = tree.add_root(Control::panel().name("root").bounds(RectD::new(
        0.0,
        0.0,
        cols as f64,
        rows.saturating_sub(1) as f64,
    )));
    let mut panel = SplittedPanel::new(&mut tree, root, &config).expect("root exists");
    panel.set_panel_width(&mut tree, SplitPanelPosition::Left, 20.0);
    panel.set_panel_width(&mut tree, SplitPanelPosition::Right, 20.0);
    panel.set_panel_height(&mut tree, SplitPanelPosition::Top, 3.0);
    panel.set_panel_height(&mut tree, SplitPanelPosition::Bottom, 5.0);
    tree.perform_layout(root);

    let scroll_id = tree
        .add(panel.panel(SplitPanelPosition::Center), Control::panel())
        .expect("center panel exists");
    let mut scrollbar = ScrollBar::new(
        scroll_id,
        HeadlessScrollBar::new(),
        std::sync::Arc::new(config.clone()),
    );
    scrollbar.set_vertical(true);

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;

    let result = run(&mut tree, &mut panel, &mut scrollbar, root);

    execute!(stdout, DisableMouseCapture, LeaveAlternateScreen, cursor::Show)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(
    tree: &mut ControlTree,
    panel: &mut SplittedPanel,
    scrollbar: &mut ScrollBar,
    root: dockkit::ControlId,
) -> io::Result<()> {
    let mut status = String::from("drag the splitters, Esc cancels a drag, q quits");

    loop {
        draw(tree, panel, scrollbar, &status)?;

        let raw = event::read()?;
        if let CrosstermEvent::Resize(cols, rows) = raw {
            tree.set_bounds(
                root,
                RectD::new(0.0, 0.0, cols as f64, rows.saturating_sub(1) as f64),
            );
            tree.perform_layout(root);
            continue;
        }

        let Some(input) = InputEvent::from_crossterm(&raw, (0.0, 0.0)) else {
            continue;
        };
        if panel.handle_input(tree, input) {
            for (side, event) in panel.take_events() {
                log::debug!("{side:?}: {event:?}");
                status = format!("{side:?} splitter: {event:?}");
            }
            continue;
        }

        match input {
            InputEvent::KeyDown {
                key: Key::Char('q'),
            } => return Ok(()),
            InputEvent::KeyDown { key: Key::Up } => {
                let value = scrollbar.value();
                scrollbar.peer_mut().move_thumb(value - 1);
                scrollbar.raise_scroll(ScrollEventType::SmallDecrement);
            }
            InputEvent::KeyDown { key: Key::Down } => {
                let value = scrollbar.value();
                scrollbar.peer_mut().move_thumb(value + 1);
                scrollbar.raise_scroll(ScrollEventType::SmallIncrement);
            }
            _ => {}
        }
        for event in scrollbar.take_events() {
            if let ScrollBarEvent::Scroll(args) = event {
                status = format!("scrolled {} -> {}", args.old_value, args.new_value);
            }
        }
    }
}

fn draw(
    tree: &ControlTree,
    panel: &SplittedPanel,
    scrollbar: &ScrollBar,
    status: &str,
) -> io::Result<()> {
    let mut stdout = io::stdout();
    queue!(
        stdout,
        SetBackgroundColor(style::Color::Reset),
        terminal::Clear(terminal::ClearType::All)
    )?;

    let panels = [
        (SplitPanelPosition::Left, Color::rgb(40, 60, 90)),
        (SplitPanelPosition::Right, Color::rgb(90, 60, 40)),
        (SplitPanelPosition::Top, Color::rgb(50, 80, 50)),
        (SplitPanelPosition::Bottom, Color::rgb(80, 50, 80)),
        (SplitPanelPosition::Center, BACKGROUND),
    ];
    for (position, color) in panels {
        let id = panel.panel(position);
        if tree.is_visible(id) {
            fill(&mut stdout, tree.bounds(id), color)?;
        }
    }

    let is_dark = is_dark_background(FOREGROUND, BACKGROUND);
    for position in [
        SplitPanelPosition::Left,
        SplitPanelPosition::Top,
        SplitPanelPosition::Right,
        SplitPanelPosition::Bottom,
    ] {
        let Some(splitter) = panel.splitter(position) else {
            continue;
        };
        if !tree.is_visible(splitter.id()) {
            continue;
        }
        let origin = tree.bounds(splitter.id());
        for op in splitter.paint(tree, is_dark, BACKGROUND) {
            let mut rect = op.rect;
            rect.x += origin.x;
            rect.y += origin.y;
            fill(&mut stdout, rect, op.color)?;
        }
    }

    let center = tree.bounds(panel.panel(SplitPanelPosition::Center));
    queue!(
        stdout,
        cursor::MoveTo(center.x as u16 + 1, center.y as u16 + 1),
        SetBackgroundColor(to_crossterm(BACKGROUND)),
        Print(format!("{scrollbar} (Up/Down)"))
    )?;

    let (_, rows) = terminal::size()?;
    queue!(
        stdout,
        cursor::MoveTo(0, rows.saturating_sub(1)),
        SetBackgroundColor(style::Color::Reset),
        Print(status)
    )?;
    stdout.flush()
}

fn fill(stdout: &mut io::Stdout, rect: RectD, color: Color) -> io::Result<()> {
    let r = rect.to_rect_i();
    if r.width <= 0 || r.height <= 0 || r.x < 0 || r.y < 0 {
        return Ok(());
    }
    let line = " ".repeat(r.width as usize);
    queue!(stdout, SetBackgroundColor(to_crossterm(color)))?;
    for row in r.y..r.y + r.height {
        queue!(stdout, cursor::MoveTo(r.x as u16, row as u16), Print(&line))?;
    }
    Ok(())
}

fn to_crossterm(color: Color) -> style::Color {
    let rgb = color.to_rgb();
    style::Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
