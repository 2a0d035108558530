mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use umdio_api::Client;

use crate::output::{print_result, OutputFormat};

#[derive(Parser)]
#[command(name = "umdio")]
#[command(about = "Query University of Maryland open data from umd.io")]
struct Cli {
    /// Output format: json or table
    #[arg(long, default_value = "json", global = true)]
    output: String,

    /// Default semester filter, 6 digits (e.g. 202108)
    #[arg(long, global = true)]
    semester: Option<String>,

    /// Default department filter, 4 letters (e.g. INST)
    #[arg(long, global = true)]
    dept_id: Option<String>,

    /// Results per page, 1-100
    #[arg(long, global = true, allow_negative_numbers = true)]
    per_page: Option<i64>,

    /// API base URL
    #[arg(long, global = true, default_value = umdio_api::BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search courses
    Courses(commands::courses::CoursesArgs),
    /// List course ids and names
    CourseList(commands::courses::CourseListArgs),
    /// Search course sections
    Sections(commands::courses::SectionsArgs),
    /// Get one section (e.g. AASP100-0101)
    Section(commands::IdArgs),
    /// Get one course (e.g. INST414)
    Course(commands::IdArgs),
    /// List semesters with data
    Semesters,
    /// List departments
    Departments,
    /// List majors
    Majors,
    /// Find professors by name or course
    Professors(commands::professors::ProfessorsArgs),
    /// List campus buildings
    Buildings,
    /// Get one building
    Building(commands::IdArgs),
    /// List bus routes
    BusRoutes,
    /// Get one bus route
    BusRoute(commands::IdArgs),
    /// List bus stops
    BusStops,
    /// Get one bus stop
    BusStop(commands::IdArgs),
    /// Get the schedules of a bus route
    BusSchedule(commands::IdArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("umdio_api=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "table" => OutputFormat::Table,
        _ => OutputFormat::Json,
    };

    let mut client = Client::with_base_url(&cli.base_url);
    if let Some(semester) = &cli.semester {
        client.set_semester(semester);
    }
    if let Some(dept_id) = &cli.dept_id {
        client.set_dept_id(dept_id);
    }
    if let Some(per_page) = cli.per_page {
        client.set_per_page(per_page);
    }

    let result = match &cli.command {
        Commands::Courses(args) => commands::courses::run(args, &client).await,
        Commands::CourseList(args) => commands::courses::run_list(args, &client).await,
        Commands::Sections(args) => commands::courses::run_sections(args, &client).await,
        Commands::Section(args) => client.section(&args.id).await,
        Commands::Course(args) => client.course(&args.id).await,
        Commands::Semesters => client.semesters().await,
        Commands::Departments => client.departments().await,
        Commands::Majors => client.majors().await,
        Commands::Professors(args) => commands::professors::run(args, &client).await,
        Commands::Buildings => client.buildings().await,
        Commands::Building(args) => client.building(&args.id).await,
        Commands::BusRoutes => client.bus_routes().await,
        Commands::BusRoute(args) => client.bus_route(&args.id).await,
        Commands::BusStops => client.bus_stops().await,
        Commands::BusStop(args) => client.bus_stop(&args.id).await,
        Commands::BusSchedule(args) => client.bus_schedule(&args.id).await,
    };

    print_result(&result, &format);

    Ok(())
}
