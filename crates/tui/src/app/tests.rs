use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use folio_catalog::{
	CatalogEndpoint, FetchError, Links, PageRequest, RawDoc, RawPage, SearchMode,
};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::App;
use crate::outcome::SearchOutcome;

const TOLKIEN_TOTAL: usize = 45;

/// In-memory catalog: "dune" has one match, "zzzz" none, "offline" fails,
/// anything else pages through 45 generated records.
#[derive(Clone, Default)]
struct FakeCatalog {
	requests: Arc<Mutex<Vec<PageRequest>>>,
}

impl FakeCatalog {
	fn requests(&self) -> Vec<PageRequest> {
		self.requests.lock().unwrap().clone()
	}
}

impl CatalogEndpoint for FakeCatalog {
	fn fetch(&self, request: &PageRequest) -> Result<RawPage, FetchError> {
		self.requests.lock().unwrap().push(request.clone());
		match request.query.as_str() {
			"offline" => Err(FetchError::Status { status: 500 }),
			"zzzz" => Ok(RawPage {
				num_found: Some(0),
				docs: Vec::new(),
			}),
			"dune" => Ok(RawPage {
				num_found: Some(1),
				docs: vec![RawDoc {
					key: "/works/OL893415W".into(),
					title: Some("Dune".into()),
					author_name: Some(vec!["Frank Herbert".into()]),
					first_publish_year: Some(1965),
					cover_i: Some(12345),
				}],
			}),
			_ => {
				let first = (request.page as usize - 1) * request.limit as usize;
				let last = (first + request.limit as usize).min(TOLKIEN_TOTAL);
				let docs = (first..last)
					.map(|index| RawDoc {
						key: format!("/works/OL{index}W"),
						title: Some(format!("Volume {index}")),
						author_name: Some(vec!["J. R. R. Tolkien".into()]),
						first_publish_year: None,
						cover_i: None,
					})
					.collect();
				Ok(RawPage {
					num_found: Some(TOLKIEN_TOTAL as u64),
					docs,
				})
			}
		}
	}
}

fn new_app(catalog: &FakeCatalog) -> App<'static> {
	App::new(catalog.clone(), Links::default())
}

fn press(app: &mut App, code: KeyCode) -> Option<SearchOutcome> {
	app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
		.expect("key handled")
}

fn ctrl(app: &mut App, ch: char) -> Option<SearchOutcome> {
	app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
		.expect("key handled")
}

fn type_text(app: &mut App, text: &str) {
	for ch in text.chars() {
		assert!(press(app, KeyCode::Char(ch)).is_none());
	}
}

fn wait_for_idle(app: &mut App) {
	let deadline = Instant::now() + Duration::from_secs(2);
	while app.state().is_loading() && Instant::now() < deadline {
		std::thread::sleep(Duration::from_millis(10));
		app.pump_fetch_results();
	}
	assert!(!app.state().is_loading(), "fetch did not finish in time");
}

fn search(app: &mut App, query: &str) {
	app.set_query(query);
	assert!(press(app, KeyCode::Enter).is_none());
	wait_for_idle(app);
}

fn render(app: &mut App, width: u16, height: u16) -> String {
	let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw frame");
	buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}

#[test]
fn enter_searches_and_renders_results() {
	let catalog = FakeCatalog::default();
	let mut app = new_app(&catalog);

	type_text(&mut app, "dune");
	assert!(press(&mut app, KeyCode::Enter).is_none());
	wait_for_idle(&mut app);

	assert_eq!(app.state().results().len(), 1);
	let screen = render(&mut app, 120, 20);
	assert!(screen.contains("Dune"));
	assert!(screen.contains("Frank Herbert"));
	assert!(screen.contains("1965"));
	assert!(screen.contains("Showing 1 of 1 results"));
	assert!(!screen.contains("Ctrl+L load more"));
}

#[test]
fn enter_on_settled_results_accepts_selection() {
	let catalog = FakeCatalog::default();
	let mut app = new_app(&catalog);
	search(&mut app, "dune");

	let outcome = press(&mut app, KeyCode::Enter).expect("selection accepted");

	assert!(outcome.accepted);
	assert_eq!(outcome.query, "dune");
	assert_eq!(outcome.mode, SearchMode::Title);
	let selection = outcome.selection.expect("book selected");
	assert_eq!(selection.title, "Dune");
	assert_eq!(selection.detail_url, "https://openlibrary.org/works/OL893415W");
	assert_eq!(catalog.requests().len(), 1);
}

#[test]
fn escape_cancels_without_selection() {
	let catalog = FakeCatalog::default();
	let mut app = new_app(&catalog);
	search(&mut app, "dune");

	let outcome = press(&mut app, KeyCode::Esc).expect("picker closed");

	assert!(!outcome.accepted);
	assert!(outcome.selection.is_none());
	assert!(ctrl(&mut app, 'c').is_some_and(|outcome| !outcome.accepted));
}

#[test]
fn tab_switches_to_author_search() {
	let catalog = FakeCatalog::default();
	let mut app = new_app(&catalog);

	assert!(press(&mut app, KeyCode::Tab).is_none());
	assert_eq!(app.mode(), SearchMode::Author);
	search(&mut app, "tolkien");

	let requests = catalog.requests();
	assert_eq!(requests.len(), 1);
	assert_eq!(requests[0].mode, SearchMode::Author);
	assert_eq!(requests[0].page, 1);

	let screen = render(&mut app, 120, 30);
	assert!(screen.contains("Showing 20 of 45 results"));
	assert!(screen.contains("Ctrl+L load more"));
	assert!(screen.contains("n/a"));
}

#[test]
fn ctrl_l_appends_pages_until_exhausted() {
	let catalog = FakeCatalog::default();
	let mut app = new_app(&catalog);
	search(&mut app, "tolkien");
	assert!(press(&mut app, KeyCode::Down).is_none());

	assert!(ctrl(&mut app, 'l').is_none());
	wait_for_idle(&mut app);
	assert_eq!(app.state().results().len(), 40);
	assert_eq!(app.current_selection().map(|book| book.id.as_str()), Some("/works/OL1W"));

	ctrl(&mut app, 'l');
	wait_for_idle(&mut app);
	assert_eq!(app.state().results().len(), 45);
	assert!(!app.state().has_more());

	ctrl(&mut app, 'l');
	wait_for_idle(&mut app);
	let pages: Vec<u32> = catalog.requests().iter().map(|request| request.page).collect();
	assert_eq!(pages, vec![1, 2, 3]);

	let screen = render(&mut app, 120, 30);
	assert!(screen.contains("Showing 45 of 45 results"));
	assert!(!screen.contains("Ctrl+L load more"));
}

#[test]
fn blank_enter_shows_validation_message() {
	let catalog = FakeCatalog::default();
	let mut app = new_app(&catalog);

	type_text(&mut app, "   ");
	assert!(press(&mut app, KeyCode::Enter).is_none());

	assert!(catalog.requests().is_empty());
	let screen = render(&mut app, 80, 12);
	assert!(screen.contains("Please enter a book title or author"));
}

#[test]
fn empty_result_set_shows_message() {
	let catalog = FakeCatalog::default();
	let mut app = new_app(&catalog);
	search(&mut app, "zzzz");

	let screen = render(&mut app, 80, 12);
	assert!(screen.contains("No books found. Try another search."));
	assert!(screen.contains("No results"));
}

#[test]
fn failed_search_keeps_previous_results() {
	let catalog = FakeCatalog::default();
	let mut app = new_app(&catalog);
	search(&mut app, "tolkien");
	search(&mut app, "offline");

	assert_eq!(app.state().results().len(), 20);
	assert_eq!(app.state().query(), "offline");
	let screen = render(&mut app, 120, 30);
	assert!(screen.contains("Failed to fetch books. Please try again later."));
	assert!(screen.contains("Volume 0"));

	// Enter retries the failed search instead of accepting a stale row.
	assert!(press(&mut app, KeyCode::Enter).is_none());
	wait_for_idle(&mut app);
	assert_eq!(catalog.requests().len(), 3);
	assert_eq!(catalog.requests()[2].query, "offline");
}

#[test]
fn repeated_enter_while_loading_sends_one_request() {
	let catalog = FakeCatalog::default();
	let mut app = new_app(&catalog);
	type_text(&mut app, "dune");

	assert!(press(&mut app, KeyCode::Enter).is_none());
	assert!(app.state().is_loading());
	assert!(press(&mut app, KeyCode::Enter).is_none());
	wait_for_idle(&mut app);

	assert_eq!(catalog.requests().len(), 1);
}

#[test]
fn newer_search_wins_over_one_in_flight() {
	let catalog = FakeCatalog::default();
	let mut app = new_app(&catalog);
	app.set_query("dune");
	press(&mut app, KeyCode::Enter);
	app.set_query("tolkien");
	press(&mut app, KeyCode::Enter);
	wait_for_idle(&mut app);

	assert_eq!(app.state().query(), "tolkien");
	assert_eq!(app.state().results().len(), 20);
	assert_eq!(app.current_selection().map(|book| book.id.as_str()), Some("/works/OL0W"));
}

#[test]
fn detail_card_follows_terminal_width() {
	let catalog = FakeCatalog::default();
	let mut app = new_app(&catalog);
	search(&mut app, "dune");

	let wide = render(&mut app, 120, 20);
	assert!(wide.contains("Book details"));
	assert!(wide.contains("First published: 1965"));
	assert!(wide.contains("https://openlibrary.org/works/OL893415W"));

	let narrow = render(&mut app, 80, 20);
	assert!(!narrow.contains("Book details"));
}

#[test]
fn picker_searches_initial_query() {
	let catalog = FakeCatalog::default();
	let mut app = crate::Picker::new(catalog.clone())
		.with_initial_query("tolkien")
		.with_mode(SearchMode::Author)
		.with_theme_name("solarized")
		.build();
	wait_for_idle(&mut app);

	assert_eq!(app.state().results().len(), 20);
	assert_eq!(catalog.requests()[0].mode, SearchMode::Author);
	assert_eq!(app.style.theme, crate::style::by_name("solarized").unwrap());
}
