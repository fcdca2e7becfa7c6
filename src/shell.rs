//! Interactive text menu over the catalog
//!
//! Thin shell around the core: reads menu choices and free-text input,
//! invokes catalog operations and prints the results. Every failure is
//! printed and the loop continues; nothing here terminates the process.

use std::io::{self, BufRead, Write};

use crate::{catalog::Catalog, models::Book, snapshot::SnapshotStore};

/// Run the menu loop until the user exits or stdin closes.
pub fn run(catalog: &mut Catalog, store: &SnapshotStore) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!();
        println!("Library Management System");
        println!("1. Display all books");
        println!("2. Find book by title");
        println!("3. Find books by author");
        println!("4. Borrow a book");
        println!("5. Return a book");
        println!("6. Save library data");
        println!("7. Exit");

        let Some(choice) = prompt(&mut input, "Enter your choice: ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                println!("All Books:");
                print_books(catalog.available_books().iter());
            }
            "2" => {
                let Some(title) = prompt(&mut input, "Enter book title: ")? else {
                    return Ok(());
                };
                match catalog.book_by_title(&title) {
                    Some(book) => println!("{book}"),
                    None => println!("Book not found."),
                }
            }
            "3" => {
                let Some(author) = prompt(&mut input, "Enter author name: ")? else {
                    return Ok(());
                };
                print_books(catalog.books_by_author(&author).into_iter());
            }
            "4" => {
                let Some(email) = prompt(&mut input, "Enter your email: ")? else {
                    return Ok(());
                };
                if !catalog.is_borrower(&email) {
                    println!("You are not a registered borrower!");
                    continue;
                }
                let Some(title) = prompt(&mut input, "Enter book title to borrow: ")? else {
                    return Ok(());
                };
                if let Err(err) = catalog.borrow_book(&email, &title) {
                    println!("{err}");
                }
            }
            "5" => {
                let Some(email) = prompt(&mut input, "Enter your email: ")? else {
                    return Ok(());
                };
                if !catalog.is_borrower(&email) {
                    println!("You are not a registered borrower!");
                    continue;
                }
                let Some(title) = prompt(&mut input, "Enter book title to return: ")? else {
                    return Ok(());
                };
                if let Err(err) = catalog.return_book(&email, &title) {
                    println!("{err}");
                }
            }
            "6" => match store.save(catalog) {
                Ok(()) => println!("Library data saved successfully."),
                Err(err) => println!("Failed to save library data: {err}"),
            },
            "7" => {
                println!("Exiting...");
                return Ok(());
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

/// Print a label, read one trimmed line. `None` means stdin closed.
fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_books<'a>(books: impl Iterator<Item = &'a Book>) {
    let mut any = false;
    for book in books {
        println!("{book}");
        any = true;
    }
    if !any {
        println!("No books found!");
    }
}
