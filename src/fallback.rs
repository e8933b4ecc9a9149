//! Curated static pools used when live feeds come up short. Content is
//! opaque to the pipeline; only titles/names/intros matter for novelty
//! filtering.

use crate::types::{Insight, PromptTip, ToolPick, VideoPick};

const TOOLS: &[(&str, &str, &str)] = &[
    ("Claude", "https://claude.ai", "Anthropic's advanced AI assistant with deep reasoning, coding, and analysis capabilities."),
    ("ChatGPT", "https://chat.openai.com", "OpenAI's conversational AI with GPT-4 powering search, coding, and creative tasks."),
    ("Gemini", "https://gemini.google.com", "Google's multimodal AI for text, image, and code generation integrated across Workspace."),
    ("Midjourney", "https://midjourney.com", "Industry-leading text-to-image generation with photorealistic quality and artistic control."),
    ("Cursor", "https://cursor.sh", "AI-first code editor with built-in assistant for understanding, editing, and generating code."),
    ("Perplexity", "https://perplexity.ai", "AI-powered search engine that provides sourced answers with real-time web access."),
    ("Replit", "https://replit.com", "Browser-based IDE with AI coding assistant for building and deploying apps instantly."),
    ("Runway", "https://runwayml.com", "Creative AI suite for video generation, image editing, and motion design."),
    ("ElevenLabs", "https://elevenlabs.io", "Realistic AI voice generation and cloning for content creation and accessibility."),
    ("Notion AI", "https://notion.so", "AI writing and organization assistant built into the Notion workspace."),
    ("Jasper", "https://jasper.ai", "AI content platform for marketing teams to generate copy, blogs, and social posts."),
    ("Supaboard", "https://supaboard.co", "Transform complex data into instant dashboards with natural language queries."),
    ("Vapi", "https://vapi.ai", "Build voice AI agents that handle complex calls and integrate with your tools."),
    ("Adaptive", "https://adaptive.security", "Protect against GenAI social engineering attacks with deepfake security simulations."),
    ("Mem AI", "https://mem.ai", "AI-powered second brain that auto-organizes notes and surfaces relevant information."),
    ("Stability AI", "https://stability.ai", "Open-source generative AI for images, video, and 3D content creation."),
    ("Hugging Face", "https://huggingface.co", "The GitHub of machine learning — host, share, and deploy models and datasets."),
    ("Vercel v0", "https://v0.dev", "AI-powered UI generation tool that creates React components from text descriptions."),
    ("Suno", "https://suno.com", "AI music creation platform that generates full songs from text prompts."),
    ("Udio", "https://udio.com", "Create studio-quality music with AI — lyrics, vocals, and instrumentation from text."),
    ("Pika", "https://pika.art", "AI video generation and editing with text-to-video and image-to-video capabilities."),
    ("Luma AI", "https://lumalabs.ai", "3D capture and generation with photorealistic neural radiance fields."),
    ("Gamma", "https://gamma.app", "AI-powered presentation and document creation — beautiful slides from a text prompt."),
    ("Descript", "https://descript.com", "AI video and podcast editor — edit media by editing text with overdub voice cloning."),
    ("Codeium", "https://codeium.com", "Free AI code completion and chat assistant supporting 70+ programming languages."),
    ("GitHub Copilot", "https://github.com/features/copilot", "AI pair programmer integrated into VS Code and JetBrains for code suggestions."),
    ("Lovable", "https://lovable.dev", "Build full-stack web apps from natural language descriptions with AI."),
    ("Bolt", "https://bolt.new", "AI-powered full-stack web development in the browser with instant deployment."),
    ("Windsurf", "https://windsurf.com", "AI-powered IDE by Codeium with deep codebase understanding and multi-file editing."),
    ("NotebookLM", "https://notebooklm.google.com", "Google's AI research assistant that synthesizes your documents into insights and podcasts."),
];

const VIDEOS: &[(&str, &str, &str)] = &[
    ("The Future of AI: 2025 Predictions", "https://www.youtube.com/watch?v=rQJmDWB9Zwk", "Two Minute Papers"),
    ("How Claude Changes Everything", "https://www.youtube.com/watch?v=E8cfrUV8yiE", "AI Explained"),
    ("New Breakthroughs in LLM Research", "https://www.youtube.com/watch?v=kTPTZ5gsR8g", "Yannic Kilcher"),
    ("The AI Revolution in Open Source", "https://www.youtube.com/watch?v=TqHwwMUZGf4", "Lex Fridman"),
    ("AI Tools That Will Blow Your Mind", "https://www.youtube.com/watch?v=JhCl-GeT4jw", "Matt Wolfe"),
    ("The Insane Engineering of AI Data Centers", "https://www.youtube.com/watch?v=ht6-LmdaEbQ", "Real Engineering"),
    ("What Most People Get Wrong About AI", "https://www.youtube.com/watch?v=5dZ_lvDgevk", "Veritasium"),
    ("I Built an AI Agent That Does Everything", "https://www.youtube.com/watch?v=sal78ACtGTc", "Fireship"),
    ("The Rise of AI Agents Explained", "https://www.youtube.com/watch?v=F8NKVhkZZWI", "AI Explained"),
    ("Open Source AI is Winning", "https://www.youtube.com/watch?v=Rk3nTUfRZmo", "Yannic Kilcher"),
    ("How AI is Reshaping Software Engineering", "https://www.youtube.com/watch?v=1bUy-1hGZpI", "Fireship"),
    ("The Truth About AI Replacing Programmers", "https://www.youtube.com/watch?v=x2_wpMkiJcI", "Theo"),
    ("Building Your First AI Agent", "https://www.youtube.com/watch?v=7E_bHg9hX9c", "Matt Wolfe"),
    ("Why Transformers Changed Everything", "https://www.youtube.com/watch?v=wjZofJX0v4M", "3Blue1Brown"),
    ("The Math Behind Neural Networks", "https://www.youtube.com/watch?v=aircAruvnKk", "3Blue1Brown"),
    ("AI Art: Creative Revolution or Theft?", "https://www.youtube.com/watch?v=tjSxFAGP9Ss", "Corridor Crew"),
    ("Running LLMs Locally: Complete Guide", "https://www.youtube.com/watch?v=J8TgKxomS2g", "NetworkChuck"),
    ("AI Music is Getting Scary Good", "https://www.youtube.com/watch?v=pQ8S4FKcRKo", "Rick Beato"),
    ("The AI Chip Wars Explained", "https://www.youtube.com/watch?v=DcYLT37ImBY", "ColdFusion"),
    ("DeepSeek: The Open Source Challenger", "https://www.youtube.com/watch?v=T5Sgg4M3NK0", "AI Explained"),
];

const INSIGHTS: &[&str] = &[
    "AI models consistently make the same logical errors as humans when not prompted to use step-by-step reasoning.",
    "Hospitals using AI for patient screening report a 23% reduction in misdiagnoses compared to traditional triage.",
    "Multilingual AI models consistently outperform monolingual ones, even for English-only tasks.",
    "AI voice cloning can now be achieved with just 3 seconds of audio, down from 30 seconds two years ago.",
    "Professional voice actors are creating deliberately poisoned training data to fight AI cloning.",
    "Fine-tuning LLMs on creative writing produces more diverse outputs than using only academic literature.",
    "The energy cost of training a single large language model has decreased 50% year over year since 2022.",
    "Small language models under 10B parameters can now match GPT-3.5 performance on most benchmarks.",
    "AI-generated code now accounts for over 25% of new code at major tech companies.",
    "Retrieval-augmented generation reduces LLM hallucination rates by up to 70% in knowledge-heavy tasks.",
    "AI weather prediction models now outperform traditional physics-based forecasting for 10-day outlooks.",
    "Open-source AI models have closed the gap with proprietary ones, trailing by less than 5% on most benchmarks.",
    "Chain-of-thought prompting improves math reasoning accuracy by 40-60% across all model sizes.",
    "AI-powered drug discovery has reduced early-stage research timelines from 4 years to under 18 months.",
    "The cost of running inference on large language models dropped 90% between 2023 and 2025.",
    "Synthetic data now trains over 60% of computer vision models deployed in production.",
    "AI coding assistants increase developer productivity by 30-55% depending on task complexity.",
    "Multimodal models that process text, images, and audio together learn representations no single-mode model can.",
    "Constitutional AI training methods reduce harmful outputs by 80% without sacrificing helpfulness.",
    "Edge AI models running on smartphones now perform tasks that required cloud GPUs just two years ago.",
    "AI-based protein structure prediction has accelerated biological research across 190 countries.",
    "Prompt injection attacks remain the #1 security vulnerability in LLM-powered applications.",
    "The average AI startup reaches product-market fit 40% faster than non-AI startups in the same category.",
    "Reinforcement learning from human feedback (RLHF) is being replaced by newer techniques like DPO and RLAIF.",
    "AI image detectors achieve only 60-70% accuracy on the latest generation models, down from 90% two years ago.",
    "Mixture-of-experts architectures use 10x less compute than dense models of equivalent capability.",
    "AI-generated content now makes up an estimated 10% of all new internet text published daily.",
    "Federated learning allows AI training on sensitive medical data without any patient information leaving hospitals.",
    "The transformer architecture, invented in 2017, still dominates AI — no successor has displaced it at scale.",
    "AI models trained with reasoning traces score 2-3x higher on complex math and logic benchmarks.",
];

const PROMPT_TIPS: &[(&str, &str, &str)] = &[
    ("Mastering Step-by-Step Reasoning",
     "Please analyze [topic/problem] step by step. First outline your approach, then work through each step showing your reasoning. Consider at least 3 different perspectives before reaching your conclusion.",
     "Structured prompts activate deeper reasoning, encouraging methodical analysis rather than rushing to conclusions."),
    ("Unleash Creative Writing",
     "I need a creative story about [topic]. Before writing, create a character profile with background, motivations, and flaws. Then outline a 3-act structure with conflict and resolution. Now write the story.",
     "Forcing the AI to plan before executing results in richer characters and more coherent plots."),
    ("Turn AI into a Coding Tutor",
     "Act as a coding mentor teaching me [language/concept]. First explain the core concept in simple terms with an analogy. Then show a basic code example. Finally, give me a simple exercise to try.",
     "Perfect for learning programming concepts step-by-step with the right amount of challenge."),
    ("Supercharge Your Research",
     "I'm researching [topic]. Identify 3 distinct perspectives. For each: 1) Summarize core arguments, 2) Note strongest evidence, 3) Identify weaknesses, 4) List key scholars/sources.",
     "This structured approach ensures more balanced, thorough research summaries."),
    ("AI Fact-Checking Mode",
     "Please fact check each claim in the above output. Assume there are mistakes — don't stop until you've checked every fact and found all errors.",
     "This prompt makes the AI meticulously comb through each claim, catching errors it would otherwise miss."),
    ("The 'Explain Like I'm Five' Ladder",
     "Explain [concept] at 5 different levels: 1) For a 5-year-old, 2) For a high schooler, 3) For a college student, 4) For a professional in the field, 5) For a world expert.",
     "This reveals different layers of understanding and helps you find the explanation level that clicks for you."),
    ("The Devil's Advocate Prompt",
     "I believe [your position]. Now argue the strongest possible case AGAINST this position. Be thorough, use evidence, and don't hold back. Then summarize the 3 most compelling counterpoints.",
     "Forces the AI to steelman the opposing view, which strengthens your own thinking and reveals blind spots."),
    ("Code Review Like a Senior Engineer",
     "Review this code as a senior engineer would. Focus on: 1) Bugs and edge cases, 2) Performance issues, 3) Security vulnerabilities, 4) Readability improvements. Be specific with line numbers.",
     "Giving the AI a specific persona and checklist produces dramatically more useful code reviews."),
    ("The 'Teach Me by Testing Me' Pattern",
     "I want to learn [topic]. Ask me 5 progressively harder questions about it. After each of my answers, tell me what I got right, what I got wrong, and explain the correct answer.",
     "Active recall through Q&A is one of the most effective learning techniques, and AI makes it interactive."),
    ("Decision Matrix Generator",
     "I need to decide between [option A] and [option B]. Create a weighted decision matrix with 8 relevant criteria. Score each option 1-10 on each criterion. Show the final weighted scores.",
     "Transforms fuzzy decisions into structured comparisons with clear winners and tradeoff visibility."),
    ("The 'Before and After' Rewriter",
     "Here's my draft: [paste text]. Rewrite it to be: 1) 50% shorter, 2) More engaging, 3) Clearer in structure. Show the original and revised versions side by side with annotations.",
     "Side-by-side comparison with annotations teaches you what makes writing stronger."),
    ("Prompt Chaining for Complex Tasks",
     "Let's solve this in phases. Phase 1: [gather information]. Phase 2: [analyze patterns]. Phase 3: [generate solution]. Phase 4: [validate and refine]. Complete each phase fully before moving on.",
     "Breaking complex tasks into explicit phases prevents the AI from rushing and produces higher-quality output."),
    ("The System Prompt Hack",
     "You are an expert [role] with 20 years of experience. Your communication style is [concise/detailed/casual]. You always [specific behavior]. You never [specific anti-behavior].",
     "Custom persona definitions dramatically change output quality by anchoring the AI's behavior to specific expertise."),
    ("Socratic Questioning Mode",
     "Don't give me the answer directly. Instead, guide me to the answer using the Socratic method. Ask me thought-provoking questions that lead me to discover the solution myself.",
     "Turns the AI into a thinking partner rather than an answer machine — great for deeper learning."),
    ("The Output Format Trick",
     "Respond in the following format: [SUMMARY] one paragraph overview [KEY POINTS] bulleted list of main takeaways [ACTION ITEMS] numbered list of next steps [QUESTIONS] things I should consider.",
     "Specifying the exact output structure ensures you get consistently organized, actionable responses."),
    ("Few-Shot Learning in Prompts",
     "Here are 3 examples of what I want: [example 1], [example 2], [example 3]. Now create 5 more in the exact same style, tone, and format.",
     "Showing examples is far more effective than describing what you want — the AI pattern-matches beautifully."),
    ("The 'What Am I Missing?' Audit",
     "Here's my plan for [project/task]. What am I missing? What could go wrong? What assumptions am I making that might be wrong? Be brutally honest.",
     "This is like having a critical friend review your work — catches blind spots you can't see yourself."),
    ("Recursive Summarization",
     "Summarize this text in 3 versions: 1) A single tweet (280 chars), 2) A paragraph (100 words), 3) A full summary (300 words). Each should stand alone and capture the key message.",
     "Forces the AI to identify what truly matters at each level of detail — useful for communication."),
    ("The Constraint Creativity Boost",
     "Solve [problem] but with these constraints: no [obvious solution], must use [specific approach], and the solution must be implementable in [timeframe]. Constraints breed creativity.",
     "Adding constraints paradoxically increases creativity by forcing the AI to explore non-obvious solutions."),
    ("Rubber Duck Debugging with AI",
     "I'm stuck on a bug. Let me explain what I've tried: [explanation]. Don't solve it yet — first, ask me 5 clarifying questions that might help me realize what I'm missing.",
     "Often the act of answering clarifying questions leads you to the solution before the AI even needs to suggest one."),
    ("The Meta-Prompt",
     "I want to [goal]. Write me the best possible prompt that I could give to an AI to achieve this goal. Include context, constraints, format, and examples.",
     "Using AI to write better prompts for AI creates a powerful feedback loop for prompt engineering."),
    ("Analogical Reasoning",
     "Explain [complex concept] using an analogy from [familiar domain]. Then explain where the analogy breaks down and what aspects it doesn't capture.",
     "Analogies with explicit limitations teach concepts faster while preventing misconceptions."),
    ("The Iterative Refinement Loop",
     "Generate a first draft of [content]. Then critique your own draft listing 5 specific weaknesses. Then rewrite addressing all 5 weaknesses. Show all three versions.",
     "Self-critique and revision produces dramatically better output than a single-pass generation."),
    ("Data Storytelling Prompt",
     "Here's raw data: [paste data]. Tell a story with this data. What trends emerge? What's surprising? What actionable insights can someone extract? Present it as a narrative, not a report.",
     "Transforms dry data into compelling narratives — perfect for presentations and reports."),
    ("The Pre-Mortem Analysis",
     "Imagine [project/decision] has failed spectacularly 6 months from now. Write a post-mortem explaining the 5 most likely reasons for failure and what could have been done to prevent each.",
     "Pre-mortems identify risks before they materialize — far more effective than optimistic planning alone."),
];

pub fn fallback_tools() -> Vec<ToolPick> {
    TOOLS
        .iter()
        .map(|(name, link, description)| ToolPick {
            name: name.to_string(),
            link: link.to_string(),
            description: description.to_string(),
        })
        .collect()
}

pub fn fallback_videos() -> Vec<VideoPick> {
    VIDEOS
        .iter()
        .map(|(title, link, channel)| VideoPick {
            title: title.to_string(),
            link: link.to_string(),
            channel: channel.to_string(),
        })
        .collect()
}

pub fn fallback_insights() -> Vec<Insight> {
    INSIGHTS
        .iter()
        .map(|text| Insight {
            text: text.to_string(),
            source: "AI Research".to_string(),
            link: None,
        })
        .collect()
}

pub fn prompt_tips() -> Vec<PromptTip> {
    PROMPT_TIPS
        .iter()
        .map(|(intro, prompt, explanation)| PromptTip {
            intro: intro.to_string(),
            prompt: prompt.to_string(),
            explanation: explanation.to_string(),
        })
        .collect()
}
