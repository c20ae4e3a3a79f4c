use crate::commands::{print_json, Context};
use crate::error::{invalid_input, invalid_record, not_found};
use crate::util::{page_number, parse_date_of_birth, parse_person_id, parse_province};
use anyhow::Result;
use clap::Args;
use peoplebook_config::validate_page_size;
use peoplebook_core::dto::{PersonListItemDto, PersonPageDto, ValidationReportDto};
use peoplebook_core::{PersonDraft, PersonRecord};
use peoplebook_store::{RecordStore, Store};

#[derive(Debug, Args)]
pub struct PersonFieldArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub dob: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub district: Option<String>,
    #[arg(long, value_name = "1-7")]
    pub province: Option<String>,
    #[arg(long)]
    pub country: Option<String>,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[command(flatten)]
    pub fields: PersonFieldArgs,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    pub id: String,
    #[command(flatten)]
    pub fields: PersonFieldArgs,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub fields: PersonFieldArgs,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    #[arg(long)]
    pub page_size: Option<i64>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub id: String,
    #[arg(long, help = "Confirm the deletion")]
    pub yes: bool,
}

impl PersonFieldArgs {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.dob.is_none()
            && self.city.is_none()
            && self.district.is_none()
            && self.province.is_none()
            && self.country.is_none()
    }

    fn apply_to(self, draft: &mut PersonDraft) -> Result<()> {
        if let Some(name) = self.name {
            draft.name = name.trim().to_string();
        }
        if let Some(email) = self.email {
            draft.email = email.trim().to_string();
        }
        if let Some(phone) = self.phone {
            draft.phone_number = phone.trim().to_string();
        }
        if let Some(dob) = self.dob {
            draft.dob = parse_date_of_birth(&dob)?;
        }
        if let Some(city) = self.city {
            draft.city = city.trim().to_string();
        }
        if let Some(district) = self.district {
            draft.district = district.trim().to_string();
        }
        if let Some(province) = self.province {
            draft.province = parse_province(&province)?;
        }
        if let Some(country) = self.country {
            draft.country = country.trim().to_string();
        }
        Ok(())
    }
}

pub fn add_person(ctx: &Context<'_>, args: AddArgs) -> Result<()> {
    let mut draft = PersonDraft::new(&ctx.config.default_country);
    args.fields.apply_to(&mut draft)?;

    let mut records = ctx.store.records();
    let record = commit(ctx, &mut records, draft)?;
    if ctx.json {
        print_json(&record)?;
    } else {
        println!("created {} {}", record.id, record.name);
    }
    Ok(())
}

pub fn edit_person(ctx: &Context<'_>, args: EditArgs) -> Result<()> {
    let id = parse_person_id(&args.id)?;
    if args.fields.is_empty() {
        return Err(invalid_input("no updates provided"));
    }

    let mut records = ctx.store.records();
    let mut draft = records
        .find_by_id(id)
        .ok_or_else(|| not_found("person not found"))?
        .to_draft();
    args.fields.apply_to(&mut draft)?;

    let record = commit(ctx, &mut records, draft)?;
    if ctx.json {
        print_json(&record)?;
    } else {
        println!("updated {} {}", record.id, record.name);
    }
    Ok(())
}

pub fn validate_person(ctx: &Context<'_>, args: ValidateArgs) -> Result<()> {
    let mut draft = PersonDraft::new(&ctx.config.default_country);
    args.fields.apply_to(&mut draft)?;

    let errors = ctx.store.records().validate(&draft);
    if ctx.json {
        print_json(&ValidationReportDto::from(errors.clone()))?;
    } else if errors.is_empty() {
        println!("valid");
    }
    if !errors.is_empty() {
        return Err(invalid_record(errors));
    }
    Ok(())
}

pub fn show_person(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let id = parse_person_id(&args.id)?;
    let record = ctx
        .store
        .records()
        .find_by_id(id)
        .ok_or_else(|| not_found("person not found"))?;

    if ctx.json {
        return print_json(&record);
    }

    println!("id: {}", record.id);
    println!("name: {}", record.name);
    println!("email: {}", record.email);
    println!("phone: {}", record.phone_number);
    if !record.dob.is_empty() {
        println!("dob: {}", record.dob);
    }
    if !record.city.is_empty() {
        println!("city: {}", record.city);
    }
    if !record.district.is_empty() {
        println!("district: {}", record.district);
    }
    println!("province: {}", record.province);
    println!("country: {}", record.country);
    Ok(())
}

pub fn list_people(ctx: &Context<'_>, args: ListArgs) -> Result<()> {
    let page = page_number(args.page)?;
    let page_size = match args.page_size {
        Some(size) => validate_page_size(size)?,
        None => ctx.config.page_size,
    };

    let window = ctx.store.records().page(page, page_size);
    if ctx.json {
        let dto: PersonPageDto = window.map(|record| PersonListItemDto::from(&record));
        return print_json(&dto);
    }

    if window.total == 0 {
        println!("no people");
        return Ok(());
    }
    if window.items.is_empty() {
        println!(
            "page {} is empty ({} pages of {})",
            window.page, window.page_count, window.page_size
        );
        return Ok(());
    }

    for record in &window.items {
        println!(
            "{}  {}  {}  {}  {}",
            record.id, record.name, record.email, record.phone_number, record.country
        );
    }
    let mut footer = format!(
        "page {} of {} ({} people)",
        window.page, window.page_count, window.total
    );
    if window.has_prev {
        footer.push_str(&format!("  prev: --page {}", window.page - 1));
    }
    if window.has_next {
        footer.push_str(&format!("  next: --page {}", window.page + 1));
    }
    println!("{}", footer);
    Ok(())
}

pub fn delete_person(ctx: &Context<'_>, args: DeleteArgs) -> Result<()> {
    let id = parse_person_id(&args.id)?;
    if !args.yes {
        return Err(invalid_input("delete requires --yes to confirm"));
    }

    let removed = ctx.store.records().delete(id)?;
    if !removed {
        return Err(not_found("person not found"));
    }
    if ctx.json {
        print_json(&serde_json::json!({ "id": id, "deleted": true }))?;
    } else {
        println!("deleted {}", id);
    }
    Ok(())
}

fn commit(
    ctx: &Context<'_>,
    records: &mut RecordStore<'_, Store>,
    draft: PersonDraft,
) -> Result<PersonRecord> {
    let errors = records.validate(&draft);
    if !errors.is_empty() {
        if ctx.json {
            print_json(&ValidationReportDto::from(errors.clone()))?;
        }
        return Err(invalid_record(errors));
    }
    Ok(records.upsert(draft)?)
}
