use anyhow::{anyhow, bail, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::io::Write;
use usermanage_client::domains::auth::{logout, LoginView, RegisterView, REDIRECT_DELAY};
use usermanage_client::domains::dashboard::Dashboard;
use usermanage_client::domains::profile::ProfileView;
use usermanage_client::session::SessionStorage;
use usermanage_client::{ApiClient, Config, SessionStore};
use usermanage_model::{ListQuery, RoleFilter, RoleTier, SortOrder};

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("usermanage_client", LevelFilter::Info)
        .init();
}

#[derive(Debug, Parser)]
#[command(name = "usermanage", about = "Admin-panel client for the UserManage backend")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Log in and store the session token
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Log out and clear the stored session
    Logout,
    /// Register a new account
    Register(RegisterArgs),
    /// Show or update the own profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
    /// Dashboard user administration
    Users {
        #[command(subcommand)]
        command: UsersCommand,
    },
}

#[derive(Debug, Args)]
struct RegisterArgs {
    #[arg(long)]
    username: String,
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
    #[arg(long)]
    confirm_password: String,
}

#[derive(Debug, Subcommand)]
enum ProfileCommand {
    /// Print the profile
    Show,
    /// Update the editable name fields
    Update {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
enum UsersCommand {
    /// List one page of users
    List(ListArgs),
    /// Delete a user shown on the selected page
    Delete {
        id: u64,
        /// Skip the interactive confirmation
        #[arg(long)]
        yes: bool,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Edit a user shown on the selected page
    Edit {
        id: u64,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        role: Option<RoleArg>,
        #[arg(long)]
        active: Option<bool>,
        #[command(flatten)]
        list: ListArgs,
    },
}

#[derive(Debug, Args)]
struct ListArgs {
    #[arg(long, default_value_t = 1)]
    page: u64,
    #[arg(long, default_value = "")]
    search: String,
    #[arg(long, value_enum, default_value_t = FilterArg::All)]
    filter: FilterArg,
    #[arg(long, value_enum, default_value_t = SortArg::Asc)]
    sort: SortArg,
}

impl ListArgs {
    fn to_query(&self) -> ListQuery {
        let mut query = ListQuery::default();
        query.set_search(self.search.clone());
        query.set_role_filter(self.filter.into());
        query.set_sort_order(self.sort.into());
        query.set_page(self.page);
        query
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FilterArg {
    All,
    Superuser,
    Staff,
    User,
}

impl std::fmt::Display for FilterArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FilterArg::All => "all",
            FilterArg::Superuser => "superuser",
            FilterArg::Staff => "staff",
            FilterArg::User => "user",
        };
        f.write_str(label)
    }
}

impl From<FilterArg> for RoleFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => RoleFilter::All,
            FilterArg::Superuser => RoleFilter::Superuser,
            FilterArg::Staff => RoleFilter::Staff,
            FilterArg::User => RoleFilter::User,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    Asc,
    Desc,
}

impl std::fmt::Display for SortArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SortArg::Asc => "asc",
            SortArg::Desc => "desc",
        })
    }
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Asc => SortOrder::Asc,
            SortArg::Desc => SortOrder::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RoleArg {
    Superuser,
    Staff,
    User,
}

impl From<RoleArg> for RoleTier {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Superuser => RoleTier::Superuser,
            RoleArg::Staff => RoleTier::Staff,
            RoleArg::User => RoleTier::User,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let cli = Cli::parse();
    let config = Config::load();
    let session = SessionStore::with_storage(SessionStorage::new()?);
    let client = ApiClient::new(&config, session.clone())
        .map_err(|err| anyhow!("{err}"))?;

    match cli.command {
        Command::Login { username, password } => {
            let mut view = LoginView::new();
            view.username = username;
            view.password = password;
            match view.submit(&client, &session).await {
                Some(route) => println!("Logged in. -> {route}"),
                None => bail!(view.error.unwrap_or_else(|| "Login failed".into())),
            }
        }
        Command::Logout => {
            let route = logout(&client, &session).await;
            println!("Logged out. -> {route}");
        }
        Command::Register(args) => {
            let mut view = RegisterView::new();
            view.form.username = args.username;
            view.form.first_name = args.first_name;
            view.form.last_name = args.last_name;
            view.form.email = args.email;
            view.form.password = args.password;
            view.form.confirm_password = args.confirm_password;
            match view.submit(&client).await {
                Some(route) => {
                    if let Some(message) = &view.success {
                        println!("{message}");
                    }
                    tokio::time::sleep(REDIRECT_DELAY).await;
                    println!("-> {route}");
                }
                None => bail!(view.error.unwrap_or_else(|| "Registration failed".into())),
            }
        }
        Command::Profile { command } => run_profile(command, &client, &session).await?,
        Command::Users { command } => run_users(command, &client, &session).await?,
    }
    Ok(())
}

async fn run_profile(
    command: ProfileCommand,
    client: &ApiClient,
    session: &SessionStore,
) -> Result<()> {
    let mut view = ProfileView::new();
    view.load(client, session).await;
    if let Some(error) = &view.error {
        bail!(error.clone());
    }
    match command {
        ProfileCommand::Show => {
            let profile = view
                .profile
                .as_ref()
                .ok_or_else(|| anyhow!("No profile loaded"))?;
            println!("Username:   {}", profile.username);
            println!("First name: {}", profile.first_name);
            println!("Last name:  {}", profile.last_name);
            println!("Email:      {}", profile.email);
            println!("Role:       {}", profile.role_label());
        }
        ProfileCommand::Update {
            first_name,
            last_name,
        } => {
            view.begin_edit();
            if let Some(first_name) = first_name {
                view.form.first_name = first_name;
            }
            if let Some(last_name) = last_name {
                view.form.last_name = last_name;
            }
            view.save(client, session).await;
            if let Some(error) = &view.error {
                bail!(error.clone());
            }
            if let Some(message) = &view.message {
                println!("{message}");
            }
        }
    }
    Ok(())
}

async fn run_users(
    command: UsersCommand,
    client: &ApiClient,
    session: &SessionStore,
) -> Result<()> {
    let backend = std::sync::Arc::new(client.clone());
    let mut dashboard = Dashboard::new(backend, session.clone());

    match command {
        UsersCommand::List(args) => {
            dashboard.set_query(args.to_query());
            dashboard.refresh().await;
            print_page(&dashboard);
        }
        UsersCommand::Delete { id, yes, list } => {
            dashboard.set_query(list.to_query());
            dashboard.refresh().await;
            if let Some(error) = &dashboard.state().error {
                bail!(error.clone());
            }
            if dashboard.state().rows.iter().all(|row| row.id != id) {
                bail!("User {id} is not on the selected page");
            }
            if !dashboard.can_delete(id) {
                bail!("Superuser accounts cannot be deleted");
            }
            if !yes && !confirm("Are you sure you want to delete this user?")? {
                println!("Aborted.");
                return Ok(());
            }
            dashboard.delete_user(id).await?;
            println!("Deleted user {id}.");
            print_page(&dashboard);
        }
        UsersCommand::Edit {
            id,
            first_name,
            last_name,
            email,
            role,
            active,
            list,
        } => {
            dashboard.set_query(list.to_query());
            dashboard.refresh().await;
            if let Some(error) = &dashboard.state().error {
                bail!(error.clone());
            }
            if !dashboard.begin_edit(id) {
                bail!("User {id} is not on the selected page");
            }
            {
                let form = dashboard
                    .edit_form_mut()
                    .ok_or_else(|| anyhow!("No edit in progress"))?;
                if let Some(first_name) = first_name {
                    form.first_name = first_name;
                }
                if let Some(last_name) = last_name {
                    form.last_name = last_name;
                }
                if let Some(email) = email {
                    form.email = email;
                }
                if let Some(role) = role {
                    form.role = role.into();
                }
                if let Some(active) = active {
                    form.is_active = active;
                }
            }
            dashboard.submit_edit().await?;
            println!("Updated user {id}.");
            print_page(&dashboard);
        }
    }
    Ok(())
}

fn print_page(dashboard: &Dashboard) {
    let state = dashboard.state();
    if let Some(error) = &state.error {
        println!("{error}");
        return;
    }
    println!(
        "Total users: {}  (page {} of {}, {} shown)",
        state.total_users,
        state.query.page,
        state.total_pages,
        state.visible_count()
    );
    println!(
        "On this page: {} staff, {} active",
        state.staff_on_page, state.active_on_page
    );
    if state.is_empty() {
        println!("No users found");
    } else {
        for row in &state.rows {
            println!(
                "{:>5}  {:<12} {:<12} {:<28} {:<9} {}",
                row.id,
                row.first_name,
                row.last_name,
                row.email,
                row.role_tier(),
                if row.is_active { "active" } else { "inactive" }
            );
        }
    }
    let pages: Vec<String> = dashboard
        .pagination_range()
        .iter()
        .map(|page| {
            if *page == state.query.page {
                format!("[{page}]")
            } else {
                page.to_string()
            }
        })
        .collect();
    let mut pager = pages.join(" ");
    if dashboard.show_jump_to_last() {
        pager.push_str(&format!(" ... {}", state.total_pages));
    }
    println!("Pages: {pager}");
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
