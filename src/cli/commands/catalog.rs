use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::{Department, Division};
use crate::ui::messages::header;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Catalog { department } = cmd {
        let departments: Vec<Department> = match department {
            Some(d) => vec![*d],
            None => {
                header("Divisions");
                for d in Division::ALL {
                    println!("  {d}");
                }
                println!();
                Department::ALL.to_vec()
            }
        };

        for dep in departments {
            header(dep);
            println!("  Activities: {}", dep.activities().join(", "));
            println!("  Tools:      {}", dep.tools().join(", "));
            println!();
        }
    }
    Ok(())
}
