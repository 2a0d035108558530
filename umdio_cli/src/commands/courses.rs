use clap::Args;
use umdio_api::{ApiResult, Client, CourseListQuery, CoursesQuery, SectionsQuery};

#[derive(Args)]
pub struct CoursesArgs {
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Filter by credit count (e.g. 3)
    #[arg(long, default_value = "")]
    pub credits: String,

    /// Filter by 4 letter gen-ed code (e.g. DSHS)
    #[arg(long, default_value = "")]
    pub gen_ed: String,

    /// Sort fields, prefix with - for descending (e.g. -credits,course_id)
    #[arg(long, default_value = "")]
    pub sort: String,
}

#[derive(Args)]
pub struct CourseListArgs {
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Sort fields, prefix with - for descending
    #[arg(long, default_value = "")]
    pub sort: String,
}

#[derive(Args)]
pub struct SectionsArgs {
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Only sections of this course (e.g. CMSC216)
    #[arg(long, default_value = "")]
    pub course_id: String,

    /// Filter by total seats
    #[arg(long, default_value = "")]
    pub seats: String,

    /// Filter by open seats
    #[arg(long, default_value = "")]
    pub open_seats: String,

    /// Filter by waitlist length
    #[arg(long, default_value = "")]
    pub waitlist: String,

    /// Sort fields, prefix with - for descending
    #[arg(long, default_value = "")]
    pub sort: String,
}

pub async fn run(args: &CoursesArgs, client: &Client) -> ApiResult {
    let query = CoursesQuery::new(args.page, &args.credits, &args.gen_ed, &args.sort);
    client.courses(&query).await
}

pub async fn run_list(args: &CourseListArgs, client: &Client) -> ApiResult {
    client
        .course_list(&CourseListQuery::new(args.page, &args.sort))
        .await
}

pub async fn run_sections(args: &SectionsArgs, client: &Client) -> ApiResult {
    let query = SectionsQuery::new(
        args.page,
        &args.course_id,
        &args.seats,
        &args.open_seats,
        &args.waitlist,
        &args.sort,
    );
    client.sections(&query).await
}
