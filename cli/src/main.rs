use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use records::endpoints::{LOGIN_PATH, join_url};
use records::envelope::decode_one;
use records::{
    Chapter, Exam, ExamType, FileMeta, ListQuery, Listed, Note, RecordId, Resource, Subject, Track, University,
    UploadError, UploadKind, Video, decode_list, error_message, extract_token,
};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing token; run `lms-admin login`, then pass --token or set LMS_TOKEN")]
    MissingToken,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("login response had no token")]
    NoToken,
    #[error("{0} cannot be listed on its own")]
    NotListable(&'static str),
    #[error("cannot read {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error("--{0} is required for this exam type")]
    MissingScope(&'static str),
}

#[derive(Parser, Debug)]
#[command(name = "lms-admin", about = "LMS admin REST CLI")]
struct Cli {
    #[arg(long, env = "LMS_API_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    /// Bearer token (with or without the `Bearer ` prefix).
    #[arg(long, env = "LMS_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    token: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Exchange credentials for a token and print it.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "LMS_PASSWORD")]
        password: String,
    },
    /// Search and page a collection the way the dashboard does.
    List(ListArgs),
    Delete {
        #[arg(value_parser = parse_resource)]
        resource: Resource,
        id: RecordId,
    },
    Exam(ExamCommand),
}

#[derive(Args, Debug)]
struct ListArgs {
    #[arg(value_parser = parse_resource)]
    resource: Resource,
    /// Parent id (track, subject, chapter or university).
    #[arg(long)]
    parent: Option<RecordId>,
    /// Track exam filter: `grand` or `chapter`.
    #[arg(long, value_parser = parse_exam_type)]
    exam_type: Option<ExamType>,
    #[arg(long, default_value = "")]
    search: String,
    #[arg(long, default_value_t = 1)]
    page: usize,
    /// Print the raw response instead of a page of rows.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct ExamCommand {
    #[command(subcommand)]
    command: ExamSubcommand,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ExamCollection {
    Track,
    University,
}

impl ExamCollection {
    fn resource(self) -> Resource {
        match self {
            Self::Track => Resource::TrackExams,
            Self::University => Resource::UniversityExams,
        }
    }
}

#[derive(Subcommand, Debug)]
enum ExamSubcommand {
    /// Print an exam's sections, questions and choices.
    Show {
        #[arg(value_enum)]
        collection: ExamCollection,
        id: RecordId,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Upload an .xlsx or .csv exam spreadsheet.
    Import(ImportArgs),
}

#[derive(Args, Debug, Default)]
struct ImportArgs {
    #[arg(long = "type", value_parser = parse_exam_type)]
    exam_type: ExamType,
    #[arg(long)]
    file: PathBuf,
    #[arg(long)]
    track: Option<RecordId>,
    #[arg(long)]
    subject: Option<RecordId>,
    #[arg(long)]
    chapter: Option<RecordId>,
    #[arg(long)]
    university: Option<RecordId>,
}

fn parse_resource(raw: &str) -> Result<Resource, String> {
    Resource::from_slug(raw).ok_or_else(|| {
        let known = Resource::ALL.iter().map(|r| r.slug()).collect::<Vec<_>>().join(", ");
        format!("unknown resource `{raw}` (expected one of: {known})")
    })
}

fn parse_exam_type(raw: &str) -> Result<ExamType, String> {
    ExamType::parse(raw).ok_or_else(|| format!("unknown exam type `{raw}` (expected chapter, grand or university)"))
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext { base_url: cli.base_url, token: cli.token };

    match cli.command {
        Command::Login { email, password } => run_login(&ctx, &email, &password).await,
        Command::List(args) => run_list(&ctx, args).await,
        Command::Delete { resource, id } => {
            api_request(&ctx, reqwest::Method::DELETE, &resource.detail(id), None).await?;
            println!("deleted {} {id}", resource.label().to_lowercase());
            Ok(())
        }
        Command::Exam(exam) => run_exam(&ctx, exam).await,
    }
}

async fn run_login(cli: &CliContext, email: &str, password: &str) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let response = client
        .post(join_url(&cli.base_url, LOGIN_PATH))
        .json(&serde_json::json!({ "email": email, "password": password }))
        .send()
        .await?;
    let body = read_response(response).await?;
    let token = extract_token(&body).ok_or(CliError::NoToken)?;
    println!("{}", bearer_value(&token));
    Ok(())
}

async fn run_list(cli: &CliContext, args: ListArgs) -> Result<(), CliError> {
    let path = list_path(&args);
    let body = api_request(cli, reqwest::Method::GET, &path, None).await?;
    if args.json {
        return print_json(&body);
    }
    let query = ListQuery { search: args.search.clone(), page: args.page };
    let rendered = match args.resource {
        Resource::Tracks => render_page::<Track>(body, &query)?,
        Resource::Subjects => render_page::<Subject>(body, &query)?,
        Resource::Chapters => render_page::<Chapter>(body, &query)?,
        Resource::Universities => render_page::<University>(body, &query)?,
        Resource::Notes => render_page::<Note>(body, &query)?,
        Resource::Videos => render_page::<Video>(body, &query)?,
        Resource::TrackExams | Resource::UniversityExams => render_page::<Exam>(body, &query)?,
        Resource::Sections | Resource::Questions | Resource::Choices => {
            return Err(CliError::NotListable(args.resource.slug()));
        }
    };
    print!("{rendered}");
    Ok(())
}

async fn run_exam(cli: &CliContext, exam: ExamCommand) -> Result<(), CliError> {
    match exam.command {
        ExamSubcommand::Show { collection, id, json } => {
            let body = api_request(cli, reqwest::Method::GET, &collection.resource().detail(id), None).await?;
            if json {
                return print_json(&body);
            }
            let exam: Exam = decode_one(body)?;
            print!("{}", render_exam(&exam));
            Ok(())
        }
        ExamSubcommand::Import(args) => run_import(cli, args).await,
    }
}

async fn run_import(cli: &CliContext, args: ImportArgs) -> Result<(), CliError> {
    let fields = import_fields(&args)?;
    let bytes = std::fs::read(&args.file).map_err(|source| CliError::Io { path: args.file.clone(), source })?;
    let meta = file_meta(&args.file, bytes.len());
    records::upload::validate(UploadKind::Spreadsheet, &meta)?;

    let part = reqwest::multipart::Part::bytes(bytes).file_name(meta.name.clone()).mime_str(&meta.mime)?;
    let form = fields
        .into_iter()
        .fold(reqwest::multipart::Form::new().part("file", part), |form, (name, value)| form.text(name, value));

    let resource = args.exam_type.resource();
    let path = resource.import().unwrap_or_else(|| resource.collection().to_owned());
    let client = authorized_client(cli)?;
    let response = client.post(join_url(&cli.base_url, &path)).multipart(form).send().await?;
    let body = read_response(response).await?;
    if body.is_null() {
        println!("imported {}", meta.name);
        Ok(())
    } else {
        print_json(&body)
    }
}

/// Text fields sent alongside an imported spreadsheet.
fn import_fields(args: &ImportArgs) -> Result<Vec<(&'static str, String)>, CliError> {
    let (key, id) = match args.exam_type {
        ExamType::Grand => ("subject", args.subject),
        ExamType::Chapter => ("chapter", args.chapter),
        ExamType::University => ("university", args.university),
    };
    let id = id.ok_or(CliError::MissingScope(key))?;
    let mut fields = vec![("exam_type", args.exam_type.as_str().to_owned())];
    if let Some(track) = args.track {
        fields.push(("track", track.to_string()));
    }
    if args.exam_type == ExamType::Chapter {
        if let Some(subject) = args.subject {
            fields.push(("subject", subject.to_string()));
        }
    }
    fields.push((key, id.to_string()));
    Ok(fields)
}

fn file_meta(path: &Path, size: usize) -> FileMeta {
    let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    let mime = match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
        Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        Some("csv") => "text/csv",
        _ => "application/octet-stream",
    };
    FileMeta::new(name, mime, u64::try_from(size).unwrap_or(u64::MAX))
}

fn list_path(args: &ListArgs) -> String {
    match (args.resource, args.exam_type) {
        (Resource::TrackExams, Some(exam_type)) => {
            let mut pairs = vec![("exam_type", exam_type.as_str().to_owned())];
            if let Some(parent) = args.parent {
                let key = if exam_type == ExamType::Chapter { "chapter" } else { "subject" };
                pairs.push((key, parent.to_string()));
            }
            records::endpoints::with_query(Resource::TrackExams.collection(), &pairs)
        }
        (resource, _) => resource.list(args.parent),
    }
}

/// One line per row: id, then the fields a reader scans for.
trait RowText {
    fn row_text(&self) -> String;
}

macro_rules! named_rows {
    ($($ty:ty),*) => {
        $(impl RowText for $ty {
            fn row_text(&self) -> String {
                format!("{}\t{}", self.id, self.name)
            }
        })*
    };
}

named_rows!(Track, Subject, Chapter, University, Note, Video);

impl RowText for Exam {
    fn row_text(&self) -> String {
        format!("{}\t{}\t{}\t{} marks", self.id, self.exam_type.as_str(), self.title, self.total_marks)
    }
}

fn render_page<T>(body: Value, query: &ListQuery) -> Result<String, CliError>
where
    T: Listed + RowText + DeserializeOwned,
{
    let items: Vec<T> = decode_list(body)?;
    let page = records::listing::paginate(&items, query);
    let mut out = String::new();
    for row in &page.rows {
        let _ = writeln!(out, "{}", row.row_text());
    }
    let _ = writeln!(out, "page {} of {} ({} matching)", page.page, page.page_count.max(1), page.total);
    Ok(out)
}

fn render_exam(exam: &Exam) -> String {
    let mut out = String::new();
    let practice = if exam.is_practice_exam { " (practice)" } else { "" };
    let _ = writeln!(out, "{} [{}]{practice}", exam.title, exam.exam_type.as_str());
    let _ = writeln!(out, "{} questions, {} marks", exam.question_count(), exam.total_marks);
    for section in &exam.sections {
        let _ = writeln!(out, "\n## {} ({} marks)", section.name, section.total_marks());
        render_questions(&mut out, &section.questions);
    }
    if !exam.questions.is_empty() {
        out.push('\n');
        render_questions(&mut out, &exam.questions);
    }
    out
}

fn render_questions(out: &mut String, questions: &[records::Question]) {
    for (index, question) in questions.iter().enumerate() {
        let _ = writeln!(out, "{}. {} [{}]", index + 1, question.text, question.marks);
        for choice in &question.choices {
            let mark = if choice.is_correct { 'x' } else { ' ' };
            let _ = writeln!(out, "   [{mark}] {}", choice.text);
        }
    }
}

fn bearer_value(token: &str) -> String {
    let token = token.trim();
    if token.starts_with("Bearer ") { token.to_owned() } else { format!("Bearer {token}") }
}

fn authorized_client(cli: &CliContext) -> Result<reqwest::Client, CliError> {
    let token = cli.token.as_deref().filter(|t| !t.trim().is_empty()).ok_or(CliError::MissingToken)?;
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(&bearer_value(token))?);
    Ok(reqwest::Client::builder().default_headers(headers).build()?)
}

async fn api_request(
    cli: &CliContext,
    method: reqwest::Method,
    path: &str,
    body: Option<Value>,
) -> Result<Value, CliError> {
    let client = authorized_client(cli)?;
    let request = client.request(method, join_url(&cli.base_url, path));
    let request = if let Some(json) = body { request.json(&json) } else { request };
    read_response(request.send().await?).await
}

async fn read_response(response: reqwest::Response) -> Result<Value, CliError> {
    let status = response.status();
    let text = response.text().await?;
    let value = if text.trim().is_empty() { Value::Null } else { serde_json::from_str(&text).unwrap_or(Value::Null) };
    if !status.is_success() {
        return Err(CliError::Api { status: status.as_u16(), message: error_message(status.as_u16(), &value) });
    }
    Ok(value)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
