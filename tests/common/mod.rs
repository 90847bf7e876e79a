#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

pub mod project {
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    pub const INVOICE_SCHEMA: &str = r#"generator client {
  provider = "prisma-client-js"
}

datasource db {
  provider = "postgresql"
  url      = env("DATABASE_URL")
}

model Invoice {
  id       Int       @id @default(autoincrement())
  total    Float
  paid     Boolean
  status   Status
  customer Customer?
}

enum Status {
  DRAFT
  PAID
}

model Customer {
  id       Int       @id
  email    String    @unique
  invoices Invoice[]
}
"#;

    /// Menu shaped like the one shipped with the project template
    pub const BASE_MENU: &str = r#"import { LucideIcon, LayoutDashboard } from "lucide-react"

export interface MenuItem {
  title: string
  url?: string
  icon?: LucideIcon
  isActive?: boolean
  items?: MenuItem[]
}

export interface MenuConfig {
  navMain: MenuItem[]
}

export const defaultMenuConfig: MenuConfig = {
  navMain: [
    {
      title: "Admin Panel",
      items: [
        {
          title: "Dashboard",
          url: "/admin/dashboard",
          icon: LayoutDashboard,
        },
      ],
    },
  ],
}
"#;

    /// Temporary project holding `prisma/schema.prisma`
    pub fn with_schema(schema: &str) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "prisma/schema.prisma", schema);
        dir
    }

    pub fn write(root: &Path, rel: &str, contents: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    pub fn read(root: &Path, rel: &str) -> String {
        fs::read_to_string(root.join(rel)).unwrap()
    }
}

pub mod cli {
    use std::path::Path;
    use std::process::{Command, Output};

    /// Run the `shadpanel` binary with `--path <root>` appended
    pub fn run_in(root: &Path, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_shadpanel"))
            .args(args)
            .arg("--path")
            .arg(root)
            .env_remove("RUST_LOG")
            .env_remove("SHADPANEL_LOG_LEVEL")
            .output()
            .expect("run shadpanel")
    }

    pub fn stdout_lines(output: &Output) -> Vec<String> {
        String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn stderr(output: &Output) -> String {
        String::from_utf8_lossy(&output.stderr).into_owned()
    }
}
