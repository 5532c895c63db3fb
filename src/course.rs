//! Curriculum content shown on the home and week 1 screens.

use crate::tui::routes::Route;
use GuideBlock::{Bullet, Code, Step, Text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lesson {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Screen the lesson opens, if it has one yet.
    pub link: Option<Route>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverviewCard {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

/// One piece of a guide section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideBlock {
    Text(&'static str),
    Bullet(&'static str),
    /// A numbered step heading, followed by its commands.
    Step(&'static str),
    /// A literal command or code line.
    Code(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideSection {
    pub heading: &'static str,
    pub blocks: &'static [GuideBlock],
}

/// A scrollable page of prose, steps and code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guide {
    pub title: &'static str,
    pub sections: &'static [GuideSection],
}

/// A footer link: label and address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const COURSE_TITLE: &str = "AI/ML API Integration Course";

pub const COURSE_TAGLINE: &str =
    "Seven weeks from your first API call to a deployed, agentic, document-aware assistant";

pub const LESSONS: &[Lesson] = &[
    Lesson {
        id: "week1",
        title: "Week 1: Foundations & API Integration",
        description: "Set up Python environments, manage API keys, make your first AI API call \
            (OpenAI, Anthropic, or Gemini) and show real AI results in the frontend. \
            REST basics, HTTP libraries and environment variable management.",
        link: Some(Route::Week1),
    },
    Lesson {
        id: "week2",
        title: "Week 2: Retrieval-Augmented Generation (RAG)",
        description: "RAG concepts, vector databases (ChromaDB, Faiss), a basic RAG pipeline \
            with LangChain or LlamaIndex, document embeddings and vector search.",
        link: None,
    },
    Lesson {
        id: "week3",
        title: "Week 3: Document Parsing & NLP Workflows",
        description: "Parse and preprocess PDF, DOCX and TXT documents, chunk and embed them \
            for RAG, handle file uploads and feed the vector database.",
        link: None,
    },
    Lesson {
        id: "week4",
        title: "Week 4: Open-Source LLMs & Deployment",
        description: "Run open-source LLMs locally (vLLM, Ollama, llama.cpp), switch the \
            backend to them, dockerize the stack and benchmark the results.",
        link: None,
    },
    Lesson {
        id: "week5",
        title: "Week 5: Agentic AI (Agents, Tools, and Memory)",
        description: "Multi-step reasoning, tool use, memory and planning. Build an agent, \
            give it tools and memory, and a UI to talk to it.",
        link: None,
    },
    Lesson {
        id: "week6",
        title: "Week 6: MVC Architecture & Advanced Frontend Patterns",
        description: "Restructure backend and frontend around MVC, apply atomic design, and \
            explore microfrontends and advanced state management.",
        link: None,
    },
    Lesson {
        id: "week7",
        title: "Week 7: Real-World Integrations & Capstone Project",
        description: "Combine RAG, agents, document parsing and LLMs into a capstone. Deploy \
            to the cloud, add authentication and document the work.",
        link: None,
    },
    Lesson {
        id: "bonus",
        title: "Bonus/Optional Topics",
        description: "Multi-agent collaboration, advanced chat UI, streaming, more file types, \
            LLM fine-tuning, open-source contributions.",
        link: None,
    },
];

pub const WEEK1_TITLE: &str = "Week 1: Foundations & API Integration";

pub const WEEK1_SUBTITLE: &str =
    "Set up the Python backend, integrate AI APIs, and talk to a local model";

pub const WEEK1_CARDS: &[OverviewCard] = &[
    OverviewCard {
        title: "Learning Objectives",
        items: &[
            "Set up Python backend (FastAPI)",
            "Integrate OpenAI/Anthropic/Gemini APIs",
            "Build a simple frontend",
            "Make your first AI API call",
        ],
    },
    OverviewCard {
        title: "What You'll Build",
        items: &[
            "FastAPI server with AI endpoints",
            "A client that calls the backend endpoints",
            "Local Ollama integration",
            "Secure environment variable setup",
        ],
    },
    OverviewCard {
        title: "Key Concepts",
        items: &[
            "REST API design",
            "Environment variables & security",
            "Frontend-backend communication",
            "Local vs cloud AI models",
        ],
    },
];

/// Week 1 sub-pages, in the order the overview lists them.
pub const WEEK1_PAGES: &[Route] = &[Route::Setup, Route::ApiIntegration, Route::Chat];

pub const SETUP_GUIDE: Guide = Guide {
    title: "Week 1 Setup Guide",
    sections: &[
        GuideSection {
            heading: "Prerequisites",
            blocks: &[
                Bullet("Python 3.8+ installed"),
                Bullet("Node.js 16+ installed"),
                Bullet("Git installed"),
                Bullet("Code editor (VS Code recommended)"),
            ],
        },
        GuideSection {
            heading: "Backend Setup",
            blocks: &[
                Step("Step 1: Navigate to Backend"),
                Code("cd backend"),
                Step("Step 2: Create Virtual Environment"),
                Code("python3 -m venv venv"),
                Step("Step 3: Activate Virtual Environment"),
                Code("source venv/bin/activate  # macOS/Linux"),
                Code("venv\\Scripts\\activate     # Windows"),
                Step("Step 4: Install Dependencies"),
                Code("pip install -r requirements.txt"),
                Code("pip install python-dotenv openai requests"),
                Step("Step 5: Set Up Environment Variables"),
                Text("Create a .env file in the backend folder:"),
                Code("OPENAI_API_KEY=your_api_key_here"),
                Step("Step 6: Start Backend Server"),
                Code("uvicorn main:app --reload"),
            ],
        },
        GuideSection {
            heading: "Ollama Setup (Optional - for local AI)",
            blocks: &[
                Step("Step 1: Install Ollama"),
                Text("Download from https://ollama.com/download"),
                Step("Step 2: Start Ollama"),
                Code("ollama run llama3"),
            ],
        },
        GuideSection {
            heading: "Course Companion",
            blocks: &[
                Step("Step 1: Point it at your backend"),
                Code("aiml-course --endpoint http://localhost:8000 tui"),
                Step("Step 2: Check the connection"),
                Code("aiml-course ask \"Say hello\""),
            ],
        },
        GuideSection {
            heading: "Verification",
            blocks: &[
                Bullet("Backend running at: http://localhost:8000"),
                Bullet("API docs at: http://localhost:8000/docs"),
                Bullet("Ollama API at: http://localhost:11434"),
            ],
        },
        GuideSection {
            heading: "Troubleshooting",
            blocks: &[
                Bullet("Port already in use: Kill the process or use different ports"),
                Bullet("Module not found: Check if virtual environment is activated"),
                Bullet("Ollama not found: Reinstall or restart terminal"),
                Bullet("Connection refused in the chat: Start the backend, then check --endpoint"),
            ],
        },
    ],
};

pub const API_INTEGRATION_GUIDE: Guide = Guide {
    title: "API Integration Guide",
    sections: &[
        GuideSection {
            heading: "What We Built",
            blocks: &[
                Text("In Week 1, we created a complete AI integration system with:"),
                Bullet("FastAPI Backend: RESTful API server with AI endpoints"),
                Bullet("Client: User interface for interacting with AI"),
                Bullet("Ollama Integration: Local LLM for free, private AI"),
                Bullet("Environment Security: Secure API key management"),
            ],
        },
        GuideSection {
            heading: "Architecture Overview",
            blocks: &[
                Step("Client"),
                Text("User Interface -> HTTP Request -> Backend"),
                Step("Backend (FastAPI)"),
                Text("Receive Request -> Process -> Call AI API -> Return Response"),
                Step("AI Provider (Ollama/OpenAI)"),
                Text("Generate AI Response -> Return to Backend"),
            ],
        },
        GuideSection {
            heading: "Backend Code Examples",
            blocks: &[
                Step("1. Basic FastAPI Setup"),
                Code("from fastapi import FastAPI"),
                Code("from pydantic import BaseModel"),
                Code("import os"),
                Code("from dotenv import load_dotenv"),
                Code(""),
                Code("load_dotenv()"),
                Code("app = FastAPI()"),
                Code(""),
                Code("class PromptRequest(BaseModel):"),
                Code("    prompt: str"),
                Step("2. OpenAI Integration"),
                Code("from openai import OpenAI"),
                Code(""),
                Code("client = OpenAI()"),
                Code(""),
                Code("@app.post(\"/ask-openai/\")"),
                Code("async def ask_openai(request: PromptRequest):"),
                Code("    try:"),
                Code("        response = client.chat.completions.create("),
                Code("            model=\"gpt-3.5-turbo\","),
                Code("            messages=[{\"role\": \"user\", \"content\": request.prompt}]"),
                Code("        )"),
                Code("        return {\"response\": response.choices[0].message.content}"),
                Code("    except Exception as e:"),
                Code("        return {\"error\": str(e)}"),
                Step("3. Ollama Integration"),
                Code("import requests"),
                Code(""),
                Code("@app.post(\"/ask-ollama/\")"),
                Code("async def ask_ollama(request: PromptRequest):"),
                Code("    try:"),
                Code("        response = requests.post("),
                Code("            \"http://localhost:11434/api/chat\","),
                Code("            json={"),
                Code("                \"model\": \"llama3\","),
                Code("                \"messages\": [{\"role\": \"user\", \"content\": request.prompt}],"),
                Code("                \"stream\": False"),
                Code("            }"),
                Code("        )"),
                Code("        data = response.json()"),
                Code("        return {\"response\": data[\"message\"][\"content\"]}"),
                Code("    except Exception as e:"),
                Code("        return {\"error\": str(e)}"),
            ],
        },
        GuideSection {
            heading: "Calling the Backend",
            blocks: &[
                Text("Every client sends the same request and reads one of two fields back:"),
                Code("POST http://localhost:8000/ask-ollama/"),
                Code("Content-Type: application/json"),
                Code(""),
                Code("{\"prompt\": \"Why is the sky blue?\"}"),
                Code(""),
                Code("{\"response\": \"...\"}   or   {\"error\": \"...\"}"),
                Text("The Ollama Chat page in this companion does exactly this."),
            ],
        },
        GuideSection {
            heading: "Security Best Practices",
            blocks: &[
                Bullet("Environment Variables: Never hardcode API keys"),
                Bullet(".env Files: Keep secrets out of version control"),
                Bullet("CORS Configuration: Control which domains can access your API"),
                Bullet("Error Handling: Don't expose sensitive information in errors"),
                Bullet("Input Validation: Validate all user inputs"),
            ],
        },
        GuideSection {
            heading: "Next Steps",
            blocks: &[
                Step("Week 2: RAG (Retrieval-Augmented Generation)"),
                Text("Add vector databases and document retrieval to your AI system"),
                Step("Week 3: Document Processing"),
                Text("Parse PDFs, DOCX files, and integrate with your RAG pipeline"),
                Step("Week 4: Deployment"),
                Text("Dockerize your application and deploy it to production"),
            ],
        },
    ],
};

pub const FOOTER_OWNER: &str = "© 2025 Foysal Mahmud";

pub const FOOTER_LINKS: &[FooterLink] = &[
    FooterLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/md-foysal-mahmud/",
    },
    FooterLink {
        label: "GitHub",
        url: "https://github.com/foysal-mahmud",
    },
];

/// Content for a guide route, if it is one.
pub fn guide_for(route: Route) -> Option<&'static Guide> {
    match route {
        Route::Setup => Some(&SETUP_GUIDE),
        Route::ApiIntegration => Some(&API_INTEGRATION_GUIDE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_week_one_is_linked() {
        let linked: Vec<_> = LESSONS.iter().filter(|l| l.link.is_some()).collect();
        assert_eq!(linked.len(), 1);
        assert_eq!(linked[0].id, "week1");
        assert_eq!(linked[0].link, Some(Route::Week1));
    }

    #[test]
    fn test_lesson_ids_unique() {
        let mut ids: Vec<_> = LESSONS.iter().map(|l| l.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), LESSONS.len());
    }

    #[test]
    fn test_week_one_pages_have_content() {
        for page in WEEK1_PAGES {
            assert_eq!(page.parent(), Some(Route::Week1));
        }
        assert_eq!(guide_for(Route::Setup), Some(&SETUP_GUIDE));
        assert_eq!(guide_for(Route::ApiIntegration), Some(&API_INTEGRATION_GUIDE));
        assert_eq!(guide_for(Route::Chat), None);
    }

    #[test]
    fn test_setup_guide_starts_the_chat_backend() {
        let commands: Vec<&str> = SETUP_GUIDE
            .sections
            .iter()
            .flat_map(|section| section.blocks)
            .filter_map(|block| match block {
                GuideBlock::Code(code) => Some(*code),
                _ => None,
            })
            .collect();
        assert!(commands.contains(&"uvicorn main:app --reload"));
        assert!(commands.contains(&"ollama run llama3"));
    }
}
