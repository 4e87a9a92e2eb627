use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, warn};

#[derive(Debug, Serialize, Deserialize)]
struct Author {
    name: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct BookSummary {
    id: u32,
    title: String,
    #[serde(default)]
    authors: Vec<Author>,
    #[serde(default)]
    languages: Vec<String>,
    #[serde(default)]
    download_count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
struct ViewResponse {
    display_list: Vec<BookSummary>,
    current_page: u32,
    has_next: bool,
    has_previous: bool,
    error_message: Option<String>,
    status_message: Option<String>,
    available_languages: Vec<String>,
    count: u64,
    total_pages: u64,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Browse(u32),
    Search { term: String, search_type: String },
    Author(String),
    Bookshelf(String),
    Sort(String),
    Filter { filter_type: String, value: String },
    Next,
    Previous,
}

const USAGE: &str = "Usage: control-module <browse [page] | search <term> [search_type] | \
author <name> | bookshelf <name>> [--sort <order>] [--filter <type> <value>] [--next] [--previous]";

fn parse_steps(args: &[String]) -> Result<Vec<Step>, String> {
    let mut steps = Vec::new();
    let mut rest = args.iter();

    match rest.next().map(String::as_str) {
        Some("browse") | None => {
            let page = match rest.clone().next() {
                Some(arg) if !arg.starts_with("--") => {
                    rest.next();
                    arg.parse::<u32>()
                        .map_err(|e| format!("Invalid page '{}': {}", arg, e))?
                }
                _ => 1,
            };
            steps.push(Step::Browse(page));
        }
        Some("search") => {
            let term = rest.next().ok_or("search needs a term")?.clone();
            let search_type = match rest.clone().next() {
                Some(arg) if !arg.starts_with("--") => {
                    rest.next();
                    arg.clone()
                }
                _ => "default".to_string(),
            };
            steps.push(Step::Search { term, search_type });
        }
        Some("author") => {
            let name = rest.next().ok_or("author needs a name")?.clone();
            steps.push(Step::Author(name));
        }
        Some("bookshelf") => {
            let name = rest.next().ok_or("bookshelf needs a name")?.clone();
            steps.push(Step::Bookshelf(name));
        }
        Some(other) => return Err(format!("Unknown command '{}'", other)),
    }

    while let Some(flag) = rest.next() {
        match flag.as_str() {
            "--sort" => {
                let order = rest.next().ok_or("--sort needs an order")?.clone();
                steps.push(Step::Sort(order));
            }
            "--filter" => {
                let filter_type = rest.next().ok_or("--filter needs a type")?.clone();
                let value = rest.next().ok_or("--filter needs a value")?.clone();
                steps.push(Step::Filter { filter_type, value });
            }
            "--next" => steps.push(Step::Next),
            "--previous" => steps.push(Step::Previous),
            other => return Err(format!("Unknown option '{}'", other)),
        }
    }

    Ok(steps)
}

struct ControlModule {
    client: Client,
    service_url: String,
}

impl ControlModule {
    fn new(service_url: String) -> Self {
        Self {
            client: Client::new(),
            service_url,
        }
    }

    async fn wait_for_service(&self) -> Result<(), Box<dyn std::error::Error>> {
        info!("Waiting for browser service to be ready...");

        let url = format!("{}/status", self.service_url);
        loop {
            match self.client.get(&url).send().await {
                Ok(response) if response.status().is_success() => {
                    info!("Browser service is ready");
                    return Ok(());
                }
                Ok(response) => {
                    warn!("Browser service responded with status: {}", response.status());
                }
                Err(e) => {
                    warn!("Browser service not ready: {}", e);
                }
            }
            sleep(Duration::from_secs(2)).await;
        }
    }

    async fn post(
        &self,
        path: &str,
        body: Value,
    ) -> Result<ViewResponse, Box<dyn std::error::Error>> {
        let url = format!("{}{}", self.service_url, path);
        let response = self.client.post(&url).json(&body).send().await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            let status = response.status();
            let message = match response.json::<ErrorResponse>().await {
                Ok(err) => err.error,
                Err(_) => status.to_string(),
            };
            error!("{} failed: {}", path, message);
            Err(format!("{} failed: {}", path, message).into())
        }
    }

    async fn run_step(&self, step: &Step) -> Result<ViewResponse, Box<dyn std::error::Error>> {
        info!("Running {:?}", step);

        match step {
            Step::Browse(page) => self.post(&format!("/browse?page={}", page), json!({})).await,
            Step::Search { term, search_type } => {
                self.post("/query", json!({ "term": term, "search_type": search_type }))
                    .await?;
                self.post("/search?page=1", json!({})).await
            }
            Step::Author(name) => self.post("/authors/select", json!({ "name": name })).await,
            Step::Bookshelf(name) => {
                self.post("/bookshelves/select", json!({ "name": name })).await
            }
            Step::Sort(order) => self.post("/sort", json!({ "order": order })).await,
            Step::Filter { filter_type, value } => {
                self.post(
                    "/filter",
                    json!({ "filter_type": filter_type, "filter_value": value }),
                )
                .await
            }
            Step::Next => self.post("/page/next", json!({})).await,
            Step::Previous => self.post("/page/previous", json!({})).await,
        }
    }

    async fn run_session(&self, steps: &[Step]) -> Result<(), Box<dyn std::error::Error>> {
        let mut last_view = None;

        for step in steps {
            last_view = Some(self.run_step(step).await?);
        }

        if let Some(view) = last_view {
            print_view(&view);
        }
        Ok(())
    }
}

fn print_view(view: &ViewResponse) {
    println!(
        "Page {}/{} ({} books in catalog)",
        view.current_page, view.total_pages, view.count
    );

    for (idx, book) in view.display_list.iter().enumerate() {
        let authors: Vec<&str> = book.authors.iter().map(|a| a.name.as_str()).collect();
        println!(
            "{:3}. #{} {} by {} [{}] ({} downloads)",
            idx + 1,
            book.id,
            book.title,
            if authors.is_empty() {
                "Unknown".to_string()
            } else {
                authors.join("; ")
            },
            book.languages.join(", "),
            book.download_count
        );
    }

    if let Some(status) = &view.status_message {
        println!("{}", status);
    }
    if let Some(err) = &view.error_message {
        println!("Error: {}", err);
    }
    if !view.available_languages.is_empty() {
        println!("Languages on this page: {}", view.available_languages.join(", "));
    }
    println!(
        "{}{}",
        if view.has_previous { "[--previous] " } else { "" },
        if view.has_next { "[--next]" } else { "" }
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("control_module=info")
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let steps = match parse_steps(&args) {
        Ok(steps) => steps,
        Err(e) => {
            error!("{}", e);
            info!("{}", USAGE);
            std::process::exit(1);
        }
    };

    let service_url = std::env::var("BROWSER_SERVICE_URL")
        .unwrap_or_else(|_| "http://0.0.0.0:7004".to_string());
    let control = ControlModule::new(service_url.trim_end_matches('/').to_string());

    control.wait_for_service().await?;
    control.run_session(&steps).await?;

    Ok(())
}
