use std::{
    cell::{Cell, RefCell},
    io::{self, Write},
};

use beeline_frontend::DistanceView;

const LOADING_INDICATOR: &str = "検索中...";

/// Input fields and result element on a terminal.
pub struct ConsoleView<W> {
    address1: String,
    address2: String,
    loading: Cell<bool>,
    result: RefCell<String>,
    out: RefCell<W>,
}

impl ConsoleView<io::Stdout> {
    pub fn stdout(address1: String, address2: String) -> Self {
        Self::new(address1, address2, io::stdout())
    }
}

impl<W: Write> ConsoleView<W> {
    pub fn new(address1: String, address2: String, out: W) -> Self {
        Self {
            address1,
            address2,
            loading: Cell::new(false),
            result: RefCell::new(String::new()),
            out: RefCell::new(out),
        }
    }

    #[cfg(test)]
    fn is_loading(&self) -> bool {
        self.loading.get()
    }

    #[cfg(test)]
    fn result(&self) -> String {
        self.result.borrow().clone()
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.out.into_inner()
    }

    fn print(&self, line: &str) {
        let mut out = self.out.borrow_mut();
        if let Err(err) = writeln!(out, "{line}").and_then(|()| out.flush()) {
            log::warn!("Unable to write to console: {err}");
        }
    }
}

impl<W: Write> DistanceView for ConsoleView<W> {
    fn address1(&self) -> String {
        self.address1.clone()
    }

    fn address2(&self) -> String {
        self.address2.clone()
    }

    fn set_loading(&self, visible: bool) {
        if visible && !self.loading.get() {
            self.print(LOADING_INDICATOR);
        }
        self.loading.set(visible);
    }

    fn set_result(&self, text: &str) {
        text.clone_into(&mut *self.result.borrow_mut());
        if !text.is_empty() {
            self.print(text);
        }
    }
}
