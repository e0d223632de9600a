use crate::cli::ProfileArgs;
use cognipath::{session::ProfileUpdate, Scholar, ScholarResult, User};

pub fn login(app: &Scholar, name: &str, email: &str) -> ScholarResult<()> {
    let user = app.session().login(name, email)?;
    println!("Signed in as {} <{}>", user.name, user.email);
    Ok(())
}

pub fn logout(app: &Scholar) -> ScholarResult<()> {
    app.session().logout()?;
    println!("Signed out.");
    Ok(())
}

pub fn whoami(app: &Scholar) -> ScholarResult<()> {
    match app.session().current()? {
        Some(user) => print_user(&user),
        None => println!("Not signed in. Run `cognipath login --name <NAME> --email <EMAIL>`."),
    }
    Ok(())
}

pub fn profile(app: &Scholar, args: ProfileArgs) -> ScholarResult<()> {
    let session = app.session();
    let user = if args.is_empty() {
        session.require()?
    } else {
        let user = session.update_profile(ProfileUpdate {
            name: args.name,
            grade: args.grade,
            goal: args.goal,
            bio: args.bio,
        })?;
        println!("Profile updated.");
        user
    };
    print_user(&user);
    Ok(())
}

pub fn dashboard(app: &Scholar) -> ScholarResult<()> {
    let dashboard = app.dashboard()?;

    println!("{}\n", dashboard.greeting);
    for feature in dashboard.features {
        println!("  {:<16} {}  ({})", feature.title, feature.description, feature.command);
    }

    println!("\nToday's schedule:");
    if dashboard.today.is_empty() {
        println!("  No routine yet. Try `cognipath routine generate`.");
    }
    for item in &dashboard.today {
        println!("  {:<22} {}", item.time, item.activity);
    }
    Ok(())
}

fn print_user(user: &User) {
    println!("{} <{}>", user.name, user.email);
    if let Some(grade) = &user.grade {
        println!("  Grade: {grade}");
    }
    if let Some(goal) = &user.goal {
        println!("  Goal:  {goal}");
    }
    if let Some(bio) = &user.bio {
        println!("  Bio:   {bio}");
    }
    println!("  Avatar: {}", user.avatar);
}
