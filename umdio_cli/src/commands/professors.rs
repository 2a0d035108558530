use clap::Args;
use umdio_api::{ApiResult, Client, ProfessorsQuery};

#[derive(Args)]
pub struct ProfessorsArgs {
    /// Professor's full name (e.g. "LaRia Rogers")
    #[arg(long, default_value = "")]
    pub name: String,

    /// A course the professor taught (e.g. CMSC216)
    #[arg(long, default_value = "")]
    pub course_id: String,
}

pub async fn run(args: &ProfessorsArgs, client: &Client) -> ApiResult {
    if args.name.is_empty() && args.course_id.is_empty() {
        eprintln!("Pass --name or --course-id to search professors.");
    }
    client
        .professors(&ProfessorsQuery::new(&args.name, &args.course_id))
        .await
}
