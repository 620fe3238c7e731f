use std::io::{self, BufRead, Write};

/// The three values collected interactively for one run.
#[derive(Debug, Clone)]
pub struct TaskInput {
    pub name: String,
    pub description: String,
    pub recipient: String,
}

/// Prompt for the task fields on stdout and read the answers, in fixed
/// order, from `reader`. Values are taken as-is apart from the trailing
/// newline; empty answers are not re-prompted.
pub fn collect(reader: &mut impl BufRead) -> io::Result<TaskInput> {
    println!("Please enter the following details:");
    let name = prompt_line(reader, "Task Name: ")?;
    let description = prompt_line(reader, "Task Description: ")?;
    let recipient = prompt_line(reader, "Recipient Email Address: ")?;
    Ok(TaskInput {
        name,
        description,
        recipient,
    })
}

fn prompt_line(reader: &mut impl BufRead, label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
