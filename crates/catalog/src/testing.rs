use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::endpoint::{CatalogEndpoint, PageRequest, RawDoc, RawPage};
use crate::error::FetchError;

/// Endpoint replaying queued answers and recording every request.
#[derive(Clone, Default)]
pub(crate) struct ScriptedEndpoint {
	answers: Arc<Mutex<VecDeque<Result<RawPage, FetchError>>>>,
	requests: Arc<Mutex<Vec<PageRequest>>>,
}

impl ScriptedEndpoint {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	pub(crate) fn respond(self, page: RawPage) -> Self {
		self.answers.lock().unwrap().push_back(Ok(page));
		self
	}

	pub(crate) fn fail(self, error: FetchError) -> Self {
		self.answers.lock().unwrap().push_back(Err(error));
		self
	}

	pub(crate) fn requests(&self) -> Vec<PageRequest> {
		self.requests.lock().unwrap().clone()
	}
}

impl CatalogEndpoint for ScriptedEndpoint {
	fn fetch(&self, request: &PageRequest) -> Result<RawPage, FetchError> {
		self.requests.lock().unwrap().push(request.clone());
		self.answers
			.lock()
			.unwrap()
			.pop_front()
			.unwrap_or_else(|| panic!("no scripted answer for {request:?}"))
	}
}

/// A page of `count` generated records, keys starting at `first`.
pub(crate) fn page_of(first: usize, count: usize, num_found: u64) -> RawPage {
	let docs = (first..first + count)
		.map(|index| RawDoc {
			key: format!("/works/OL{index}W"),
			title: Some(format!("Book {index}")),
			author_name: Some(vec![format!("Author {index}")]),
			first_publish_year: Some(1900 + index as i32),
			cover_i: Some(index as i64),
		})
		.collect();
	RawPage {
		num_found: Some(num_found),
		docs,
	}
}
