//! Contact CLI commands
//!
//! Values not given on the command line are asked for interactively.

use clap::Subcommand;

use crate::display::{format_contact_details, format_contact_table};
use crate::error::{ContactBookError, ContactResult};
use crate::models::{Category, ContactId};
use crate::services::ContactService;
use crate::storage::Storage;

use super::prompt::{non_empty, positive_id, Prompter};

/// Contact subcommands
#[derive(Subcommand, Debug)]
pub enum ContactCommands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(short, long)]
        name: Option<String>,
        /// Contact email
        #[arg(short, long)]
        email: Option<String>,
        /// Contact phone number
        #[arg(short, long)]
        phone: Option<String>,
        /// Category (Family, Friends, Work)
        #[arg(short, long)]
        category: Option<Category>,
    },
    /// View all contacts
    #[command(alias = "view")]
    List,
    /// Delete a contact by ID
    Delete {
        /// Contact ID
        id: Option<ContactId>,
    },
    /// Show contacts in one category
    Filter {
        /// Category (Family, Friends, Work)
        #[arg(short, long)]
        category: Option<Category>,
    },
    /// Search contacts by name or email
    Search {
        /// Text to look for (case-insensitive)
        term: Option<String>,
    },
    /// Show one contact's details
    Show {
        /// Contact ID
        id: ContactId,
    },
}

/// Handle a contact command
pub fn handle_contact_command<P: Prompter>(
    storage: &Storage,
    cmd: ContactCommands,
    prompter: &mut P,
) -> ContactResult<()> {
    let service = ContactService::new(storage);

    match cmd {
        ContactCommands::Add {
            name,
            email,
            phone,
            category,
        } => {
            let name = match name {
                Some(name) => name,
                None => prompter.input("Enter contact name:", Some(&non_empty))?,
            };
            let email = match email {
                Some(email) => email,
                None => prompter.input("Enter contact email:", Some(&non_empty))?,
            };
            let phone = match phone {
                Some(phone) => phone,
                None => prompter.input("Enter contact phone number:", None)?,
            };
            let category = match category {
                Some(category) => category,
                None => select_category(prompter, "Choose contact category:")?,
            };

            service.add(&name, &email, &phone, category)?;
            prompter.say("Contact added!")?;
        }

        ContactCommands::List => {
            let contacts = service.list()?;
            if contacts.is_empty() {
                prompter.say("No contacts available.")?;
            } else {
                prompter.say(&format_contact_table(&contacts))?;
            }
        }

        ContactCommands::Delete { id } => {
            if service.list()?.is_empty() {
                prompter.say("No contacts available.")?;
                return Ok(());
            }

            let id = match id {
                Some(id) => id,
                None => {
                    let answer = prompter
                        .input("Enter the ID of the contact to delete:", Some(&positive_id))?;
                    answer
                        .parse::<ContactId>()
                        .map_err(|e| ContactBookError::Validation(e.to_string()))?
                }
            };

            match service.delete(id) {
                Ok(_) => prompter.say("Contact deleted!")?,
                Err(e) if e.is_not_found() => prompter.say("Contact not found!")?,
                Err(e) => return Err(e),
            }
        }

        ContactCommands::Filter { category } => {
            let category = match category {
                Some(category) => category,
                None => select_category(prompter, "Select category to filter by:")?,
            };

            let contacts = service.filter_by_category(category)?;
            if contacts.is_empty() {
                prompter.say("No contacts found in this category.")?;
            } else {
                prompter.say(&format_contact_table(&contacts))?;
            }
        }

        ContactCommands::Search { term } => {
            let term = match term {
                Some(term) => term,
                None => prompter.input("Enter name or email to search for:", None)?,
            };

            let contacts = service.search(&term)?;
            if contacts.is_empty() {
                prompter.say("No contacts found!")?;
            } else {
                prompter.say(&format_contact_table(&contacts))?;
            }
        }

        ContactCommands::Show { id } => match service.get(id)? {
            Some(contact) => prompter.say(format_contact_details(&contact).trim_end())?,
            None => prompter.say("Contact not found!")?,
        },
    }

    Ok(())
}

fn select_category<P: Prompter>(prompter: &mut P, message: &str) -> ContactResult<Category> {
    let labels: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
    let index = prompter.select(message, &labels)?;
    Ok(Category::ALL[index])
}
