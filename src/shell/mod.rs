// src/shell/mod.rs
//! The interactive shell: a menu-driven front end over the engine.
//!
//! One page per state: main menu, search prompt, result list, viewing a
//! result. Counter files are rewritten after every query and click when
//! `auto_persist` is on. EOF on stdin exits cleanly from any prompt.

use crate::config::Config;
use crate::dataset;
use crate::engine::SearchEngine;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

enum Page {
    Main,
    Search,
    Results,
    Viewing(String),
    Exit,
}

pub fn run(engine: &mut SearchEngine, config: &Config) -> Result<()> {
    Shell::new(engine, config).run()
}

struct Shell<'a> {
    engine: &'a mut SearchEngine,
    config: &'a Config,
    results: Vec<String>,
}

impl<'a> Shell<'a> {
    fn new(engine: &'a mut SearchEngine, config: &'a Config) -> Self {
        Self {
            engine,
            config,
            results: Vec::new(),
        }
    }

    fn run(&mut self) -> Result<()> {
        println!("{}", "Welcome!".bold());
        println!("What would you like to do?");

        let mut page = Page::Main;
        loop {
            page = match page {
                Page::Main => self.main_page()?,
                Page::Search => self.search_page()?,
                Page::Results => self.results_page()?,
                Page::Viewing(id) => self.viewing_page(&id)?,
                Page::Exit => return Ok(()),
            };
        }
    }

    fn main_page(&mut self) -> Result<Page> {
        println!();
        println!("1. New search");
        println!("2. Exit");
        Ok(match self.menu_choice(2)? {
            Some(1) => Page::Search,
            _ => Page::Exit,
        })
    }

    fn search_page(&mut self) -> Result<Page> {
        let Some(query) = self.prompt("Search: ")? else {
            return Ok(Page::Exit);
        };
        self.results = self.engine.query(&query);
        self.persist()?;
        Ok(Page::Results)
    }

    fn results_page(&mut self) -> Result<Page> {
        if self.results.is_empty() {
            println!("{}", "No results found.".yellow());
            return Ok(Page::Main);
        }

        println!();
        println!("{}", "Search results:".bold());
        for (index, id) in self.results.iter().enumerate() {
            println!("{}. {id}", index + 1);
        }
        println!();
        println!("1. Open a result");
        println!("2. New search");
        println!("3. Exit");

        match self.menu_choice(3)? {
            Some(1) => self.open_result(),
            Some(2) => Ok(Page::Search),
            _ => Ok(Page::Exit),
        }
    }

    fn open_result(&mut self) -> Result<Page> {
        println!("Enter the number of the result to open");
        let Some(index) = self.menu_choice(self.results.len())? else {
            return Ok(Page::Exit);
        };
        let Some(id) = self.results.get(index - 1).cloned() else {
            return Ok(Page::Results);
        };
        self.engine.record_click(&id);
        self.persist()?;
        Ok(Page::Viewing(id))
    }

    fn viewing_page(&mut self, id: &str) -> Result<Page> {
        println!();
        println!("You are now viewing {}", id.bold());
        println!("1. Return to results");
        println!("2. New search");
        println!("3. Exit");
        Ok(match self.menu_choice(3)? {
            Some(1) => Page::Results,
            Some(2) => Page::Search,
            _ => Page::Exit,
        })
    }

    /// Reads menu input until it parses as a number in `1..=max`.
    /// `None` means stdin hit EOF.
    fn menu_choice(&mut self, max: usize) -> Result<Option<usize>> {
        loop {
            let Some(line) = self.prompt("> ")? else {
                return Ok(None);
            };
            match line.trim().parse::<usize>() {
                Ok(choice) if (1..=max).contains(&choice) => return Ok(Some(choice)),
                _ => println!("{}", "Please enter a valid choice".yellow()),
            }
        }
    }

    /// One line from stdin, newline stripped but inner whitespace kept
    /// (leading/trailing spaces are significant to term splitting).
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        print!("{label}");
        io::stdout().flush()?;
        let mut input = String::new();
        let bytes = io::stdin()
            .read_line(&mut input)
            .context("Failed to read stdin")?;
        if bytes == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim_end_matches(|c| c == '\n' || c == '\r').to_string()))
    }

    fn persist(&self) -> Result<()> {
        if !self.config.preferences.auto_persist {
            return Ok(());
        }
        dataset::persist_counters(&self.config.dataset, self.engine.store())
            .context("Failed to persist counters")
    }
}
