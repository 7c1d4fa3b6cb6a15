use crate::di::UseCases;
use clap::Subcommand;
use prionis_dns_application::use_cases::RecordChanges;
use prionis_dns_domain::DnsRecord;

#[derive(Subcommand, Debug)]
pub enum RecordCommand {
    /// Store a new resource record
    Add {
        /// Owner name, e.g. www.example.com
        domain: String,

        /// Type mnemonic (A, NS, CNAME, MX, TXT, ...)
        #[arg(short = 't', long = "type")]
        record_type: String,

        /// Record data in presentation form, e.g. "10 mail.example.com" for MX
        data: String,

        /// Class mnemonic
        #[arg(long, default_value = "IN")]
        class: String,

        /// Time to live in seconds (default 300)
        #[arg(long)]
        ttl: Option<u32>,
    },

    /// List stored records
    List,

    /// Show one stored record
    Get { id: i64 },

    /// Change fields of a stored record
    Update {
        id: i64,

        #[arg(long)]
        domain: Option<String>,

        #[arg(short = 't', long = "type")]
        record_type: Option<String>,

        #[arg(long)]
        class: Option<String>,

        #[arg(long)]
        ttl: Option<u32>,

        #[arg(long)]
        data: Option<String>,
    },

    /// Delete a stored record
    Delete { id: i64 },
}

pub async fn run(command: RecordCommand, use_cases: &UseCases) -> anyhow::Result<()> {
    match command {
        RecordCommand::Add {
            domain,
            record_type,
            data,
            class,
            ttl,
        } => {
            let record = use_cases
                .create_record
                .execute(domain, &record_type, Some(&class), data, ttl)
                .await?;
            println!("added {}", format_record(&record));
        }
        RecordCommand::List => {
            let records = use_cases.list_records.execute().await?;
            if records.is_empty() {
                println!("no records");
            }
            for record in &records {
                println!("{}", format_record(record));
            }
        }
        RecordCommand::Get { id } => {
            let record = use_cases.list_records.get(id).await?;
            println!("{}", format_record(&record));
        }
        RecordCommand::Update {
            id,
            domain,
            record_type,
            class,
            ttl,
            data,
        } => {
            let changes = RecordChanges {
                domain,
                record_type,
                class,
                ttl,
                data,
            };
            let record = use_cases.update_record.execute(id, changes).await?;
            println!("updated {}", format_record(&record));
        }
        RecordCommand::Delete { id } => {
            let record = use_cases.delete_record.execute(id).await?;
            println!("deleted {}", format_record(&record));
        }
    }
    Ok(())
}

/// One record per line in zone-file order: id, owner, ttl, class, type, data.
pub fn format_record(record: &DnsRecord) -> String {
    format!(
        "{:>5}  {} {} {} {} {}",
        record.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string()),
        record.domain,
        record.ttl,
        record.class,
        record.record_type,
        record.data
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use prionis_dns_domain::RecordType;

    #[test]
    fn test_format_record() {
        let record = DnsRecord::new("example.com", RecordType::MX, 300, "10 mail.example.com").with_id(3);
        assert_eq!(
            format_record(&record),
            "    3  example.com 300 IN MX 10 mail.example.com"
        );
    }
}
