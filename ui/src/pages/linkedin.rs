// LinkedIn profile optimizer: five-step wizard view
use crate::api::{mock::imported_profile, use_backend, BackendHandle};
use crate::catalog::{bundle_savings, ExtraModule, BUNDLE_PRICE};
use crate::components::buttons::{Button, ButtonVariant, Spinner};
use crate::components::notifications::Alert;
use crate::controller::run_submission;
use crate::store::{use_stores, AppStores, LinkedInAction};
use crate::timer::TaskScope;
use crate::wizard::*;
use leptos::*;
use leptos_router::*;

/// Runs one analysis and hands the outcome back to the wizard under `ticket`.
fn run_analysis(
    wizard: RwSignal<LinkedInWizard>,
    stores: AppStores,
    backend: BackendHandle,
    scope: TaskScope,
    (request, ticket): (AnalysisRequest, AnalysisTicket),
) {
    let linkedin = stores.linkedin;
    scope.spawn(async move {
        let set_loading = move |busy| linkedin.dispatch(LinkedInAction::SetLoading(busy));
        let outcome = match run_submission("profile-analysis", set_loading, backend.run_profile_analysis(request)).await {
            Ok(report) => AnalysisOutcome::Success(report),
            Err(err) => AnalysisOutcome::Failure(err.user_message()),
        };
        let summary = match &outcome {
            AnalysisOutcome::Success(report) => Some(report.summary()),
            AnalysisOutcome::Failure(_) => None,
        };

        let accepted = wizard
            .try_update(|w| w.finish_analysis(ticket, outcome))
            .unwrap_or(false);
        if accepted {
            if let Some(summary) = summary {
                linkedin.dispatch(LinkedInAction::SetAnalysis(Some(summary)));
            }
        }
    });
}

#[component]
pub fn LinkedInToolPage() -> impl IntoView {
    let wizard = create_rw_signal(LinkedInWizard::new());
    // Owns the analysis task so it outlives the step that started it
    let scope = TaskScope::new();
    let step = create_memo(move |_| wizard.with(LinkedInWizard::step));

    view! {
        <div class="max-w-5xl mx-auto">
            <h1 class="text-3xl font-bold text-gray-900 mb-2">"LinkedIn Profile Optimizer"</h1>
            <p class="text-gray-600 mb-8">
                "AI-powered LinkedIn optimization using competitor analysis and industry insights"
            </p>
            <StepIndicator step=step/>
            <div class="bg-white rounded-lg shadow-lg p-8">
                {move || match step.get() {
                    1 => view! { <ConnectStep wizard=wizard/> }.into_view(),
                    2 => view! { <TargetInfoStep wizard=wizard scope=scope/> }.into_view(),
                    3 => view! { <AnalysisStep wizard=wizard scope=scope/> }.into_view(),
                    4 => view! { <ResultsStep wizard=wizard/> }.into_view(),
                    _ => view! { <ModulesStep wizard=wizard/> }.into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn StepIndicator(step: Memo<u8>) -> impl IntoView {
    view! {
        <ol class="flex items-center justify-between mb-8">
            {STEP_LABELS
                .iter()
                .enumerate()
                .map(|(index, label)| {
                    let number = index as u8 + 1;
                    let circle = move || {
                        let current = step.get();
                        if number < current {
                            "bg-green-500 text-white"
                        } else if number == current {
                            "bg-blue-600 text-white"
                        } else {
                            "bg-gray-200 text-gray-600"
                        }
                    };
                    view! {
                        <li class="flex flex-col items-center flex-1">
                            <span class=move || format!("w-10 h-10 rounded-full flex items-center justify-center font-semibold {}", circle())>
                                {move || if number < step.get() { "✓".to_string() } else { number.to_string() }}
                            </span>
                            <span class="mt-2 text-xs font-medium text-gray-600">{*label}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

#[component]
fn ConnectStep(wizard: RwSignal<LinkedInWizard>) -> impl IntoView {
    let stores = use_stores();

    let connect = move |choice: ConnectionChoice| {
        let imported = match &choice {
            ConnectionChoice::LinkedIn(snapshot) => Some(snapshot.clone()),
            ConnectionChoice::Manual => None,
        };
        match wizard.try_update(|w| w.choose_connection_method(choice)) {
            Some(Ok(())) => {
                if let Some(snapshot) = imported {
                    let profile = stores.user_auth.with_untracked(|s| {
                        s.user
                            .as_ref()
                            .map(|u| snapshot.to_profile(&u.id, &u.name))
                            .unwrap_or_else(|| snapshot.to_profile("", ""))
                    });
                    stores.linkedin.dispatch(LinkedInAction::SetProfile(Some(profile)));
                }
            }
            Some(Err(err)) => log::warn!("connect ignored: {}", err),
            None => {}
        }
    };

    view! {
        <div class="text-center">
            <h2 class="text-2xl font-bold text-gray-900 mb-4">"Connect Your LinkedIn Profile"</h2>
            <p class="text-gray-600 mb-8">"Choose how you'd like to provide your LinkedIn profile information."</p>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="border-2 border-gray-200 rounded-lg p-6 hover:border-blue-500">
                    <h3 class="text-lg font-semibold text-gray-900 mb-2">"Connect via LinkedIn"</h3>
                    <p class="text-sm text-gray-600 mb-4">"Automatically import your profile data in seconds"</p>
                    <Button
                        full_width=true
                        on_click=move |_: ev::MouseEvent| connect(ConnectionChoice::LinkedIn(imported_profile()))
                    >
                        "Connect LinkedIn"
                    </Button>
                </div>
                <div class="border-2 border-gray-200 rounded-lg p-6 hover:border-blue-500">
                    <h3 class="text-lg font-semibold text-gray-900 mb-2">"Paste Profile Data"</h3>
                    <p class="text-sm text-gray-600 mb-4">"Copy and paste your LinkedIn profile information"</p>
                    <Button
                        variant=ButtonVariant::Secondary
                        full_width=true
                        on_click=move |_: ev::MouseEvent| connect(ConnectionChoice::Manual)
                    >
                        "Enter Manually"
                    </Button>
                </div>
            </div>
            <div class="mt-8 bg-blue-50 border border-blue-200 rounded-lg p-4 text-left">
                <p class="text-sm text-blue-800">
                    <strong>"Safe Fallback: "</strong>
                    "Both methods work perfectly. Connecting via LinkedIn is faster, but manual entry gives you full control."
                </p>
            </div>
        </div>
    }
}

#[derive(Debug, Clone, Copy)]
enum DraftField {
    TargetRole,
    Location,
    Industry,
    TargetSkills,
    CurrentHeadline,
    CurrentAbout,
    CurrentSkills,
}

impl DraftField {
    fn read(self, draft: &TargetInfoDraft) -> &str {
        match self {
            DraftField::TargetRole => &draft.target_role,
            DraftField::Location => &draft.location,
            DraftField::Industry => &draft.industry,
            DraftField::TargetSkills => &draft.target_skills,
            DraftField::CurrentHeadline => &draft.current_headline,
            DraftField::CurrentAbout => &draft.current_about,
            DraftField::CurrentSkills => &draft.current_skills,
        }
    }

    fn slot(self, draft: &mut TargetInfoDraft) -> &mut String {
        match self {
            DraftField::TargetRole => &mut draft.target_role,
            DraftField::Location => &mut draft.location,
            DraftField::Industry => &mut draft.industry,
            DraftField::TargetSkills => &mut draft.target_skills,
            DraftField::CurrentHeadline => &mut draft.current_headline,
            DraftField::CurrentAbout => &mut draft.current_about,
            DraftField::CurrentSkills => &mut draft.current_skills,
        }
    }
}

#[component]
fn DraftInput(
    draft: RwSignal<TargetInfoDraft>,
    field: DraftField,
    label: &'static str,
    placeholder: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional)] rows: Option<u32>,
) -> impl IntoView {
    let value = move || draft.with(|d| field.read(d).to_string());
    let on_input = move |ev: ev::Event| {
        let text = event_target_value(&ev);
        draft.update(|d| *field.slot(d) = text);
    };
    let class = "w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent";

    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-2">
                {label}
                {required.then(|| view! { <span class="text-red-500">" *"</span> })}
            </label>
            {match rows {
                Some(rows) => view! {
                    <textarea class=class rows=rows placeholder=placeholder prop:value=value on:input=on_input></textarea>
                }
                .into_view(),
                None => view! {
                    <input type="text" class=class placeholder=placeholder prop:value=value on:input=on_input/>
                }
                .into_view(),
            }}
        </div>
    }
}

#[component]
fn TargetInfoStep(wizard: RwSignal<LinkedInWizard>, scope: TaskScope) -> impl IntoView {
    let stores = use_stores();
    let backend = use_backend();
    let draft = create_rw_signal(wizard.with_untracked(|w| w.draft().cloned().unwrap_or_default()));
    let error = create_rw_signal(None::<String>);
    let connection = wizard.with_untracked(|w| w.connection().cloned());
    let is_manual = connection
        .as_ref()
        .map_or(true, |c| c.method == ConnectionMethod::Manual);
    let imported = connection.and_then(|c| c.snapshot);

    let start = move |_: ev::MouseEvent| {
        match wizard.try_update(|w| w.submit_target_info(draft.get_untracked())) {
            Some(Ok(started)) => run_analysis(wizard, stores, backend.clone(), scope, started),
            Some(Err(err)) => error.set(Some(err.to_string())),
            None => {}
        }
    };

    let header = match imported {
        Some(snapshot) => view! {
            <div>
                <h2 class="text-2xl font-bold text-gray-900 mb-4">"Current Profile Retrieved"</h2>
                <p class="text-gray-600 mb-6">"We've retrieved your LinkedIn profile. Now tell us about your target role."</p>
                <div class="bg-gray-50 rounded-lg p-4 mb-6 text-sm text-gray-700">
                    <p class="mb-1"><strong>"Current Headline: "</strong>{snapshot.headline}</p>
                    <p><strong>"Skills: "</strong>{snapshot.skills.join(", ")}</p>
                </div>
            </div>
        }
        .into_view(),
        None => view! {
            <div>
                <h2 class="text-2xl font-bold text-gray-900 mb-4">"Enter Your Current Profile"</h2>
                <p class="text-gray-600 mb-6">"Paste your current LinkedIn profile information and target role details."</p>
            </div>
        }
        .into_view(),
    };

    view! {
        <div class="space-y-6">
            {header}
            <Alert message=error/>
            {is_manual.then(|| view! {
                <div class="space-y-4">
                    <DraftInput draft=draft field=DraftField::CurrentHeadline label="Current Headline" placeholder="e.g., Software Engineer | Full Stack Developer"/>
                    <DraftInput draft=draft field=DraftField::CurrentAbout label="Current About Section" placeholder="Paste your current about/summary section..." rows=4/>
                    <DraftInput draft=draft field=DraftField::CurrentSkills label="Current Skills (comma-separated)" placeholder="e.g., React, Node.js, Python, AWS"/>
                </div>
            })}
            <h3 class="text-lg font-semibold text-gray-900">"Target Role Information"</h3>
            <DraftInput draft=draft field=DraftField::TargetRole label="Target Role" placeholder="e.g., Senior Software Engineer, Product Manager, Data Scientist" required=true/>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <DraftInput draft=draft field=DraftField::Location label="Location" placeholder="e.g., San Francisco, Remote, New York" required=true/>
                <DraftInput draft=draft field=DraftField::Industry label="Industry" placeholder="e.g., Technology, Finance, Healthcare" required=true/>
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-2">
                    "Experience Level" <span class="text-red-500">" *"</span>
                </label>
                <select
                    class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500"
                    on:change=move |ev| {
                        let level = ExperienceLevel::from_value(&event_target_value(&ev));
                        draft.update(|d| d.experience_level = level);
                    }
                >
                    <option value="" selected=move || draft.with(|d| d.experience_level.is_none())>"Select experience level"</option>
                    {ExperienceLevel::ALL
                        .into_iter()
                        .map(|level| view! {
                            <option
                                value=level.value()
                                selected=move || draft.with(|d| d.experience_level == Some(level))
                            >
                                {level.label()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>
            <div>
                <DraftInput draft=draft field=DraftField::TargetSkills label="Target Skills (Optional)" placeholder="e.g., Kubernetes, Machine Learning, Product Strategy (comma-separated)"/>
                <p class="text-xs text-gray-500 mt-1">"Skills you want to highlight or acquire for your target role"</p>
            </div>
            <div class="flex justify-between pt-4">
                <Button
                    variant=ButtonVariant::Secondary
                    on_click=move |_: ev::MouseEvent| {
                        wizard.update(|w| {
                            w.update_draft(draft.get_untracked());
                            w.retreat();
                        });
                    }
                >
                    "Back"
                </Button>
                <Button disabled=Signal::derive(move || !draft.with(TargetInfoDraft::is_complete)) on_click=start>
                    "Start Analysis"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn AnalysisTask(
    title: &'static str,
    description: &'static str,
    #[prop(into)] detail: Signal<Option<String>>,
    #[prop(into)] running: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="border border-gray-200 rounded-lg p-6 flex items-start">
            <div class="w-8 flex-shrink-0 text-blue-600">
                <Show when=move || running.get() fallback=|| view! { <span class="text-green-500 text-xl">"✓"</span> }>
                    <Spinner/>
                </Show>
            </div>
            <div class="flex-1 ml-2">
                <h3 class="text-lg font-semibold text-gray-900 mb-2">{title}</h3>
                <p class="text-sm text-gray-600 mb-3">{description}</p>
                {move || detail.get().map(|d| view! { <p class="text-sm font-medium text-green-600">{d}</p> })}
            </div>
        </div>
    }
}

#[component]
fn AnalysisStep(wizard: RwSignal<LinkedInWizard>, scope: TaskScope) -> impl IntoView {
    let stores = use_stores();
    let backend = use_backend();

    let running = Signal::derive(move || wizard.with(LinkedInWizard::is_busy));
    let failure = create_memo(move |_| {
        wizard.with(|w| match w.state() {
            WizardState::Analysis {
                progress: AnalysisProgress::Failed(reason),
                ..
            } => Some(reason.clone()),
            _ => None,
        })
    });
    let detail = move |describe: fn(&AnalysisReport) -> String| {
        Signal::derive(move || wizard.with(|w| w.report().map(describe)))
    };

    let retry = move |_: ev::MouseEvent| {
        match wizard.try_update(LinkedInWizard::retry_analysis) {
            Some(Ok(started)) => run_analysis(wizard, stores, backend.clone(), scope, started),
            Some(Err(err)) => log::warn!("retry ignored: {}", err),
            None => {}
        }
    };
    let back = move |_: ev::MouseEvent| {
        wizard.update(|w| {
            w.retreat();
        });
    };

    view! {
        <div>
            <h2 class="text-2xl font-bold text-gray-900 mb-4">"Analyzing Your Profile"</h2>
            <p class="text-gray-600 mb-8">"Our AI is working hard to optimize your LinkedIn profile for maximum impact."</p>
            {move || failure.get().map(|reason| view! {
                <div class="mb-6 rounded-md border border-red-200 bg-red-50 p-4 text-sm text-red-800" role="alert">
                    <p class="font-medium">"The analysis could not be completed."</p>
                    <p>{reason}</p>
                </div>
            })}
            <div class="space-y-4">
                <AnalysisTask
                    title="A) Competitor Discovery"
                    description="Finding and analyzing top LinkedIn profiles matching your target role, location, and industry."
                    detail=detail(|r| format!("Found {} competitor profiles", r.competitor_profiles.count))
                    running=running
                />
                <AnalysisTask
                    title="B) Keyword Map Creation"
                    description="Identifying industry, role, location, and skill-specific keywords from top performers."
                    detail=detail(|r| format!("Mapped {} keywords", r.keyword_map.headline_count()))
                    running=running
                />
                <AnalysisTask
                    title="C) Gap Analysis"
                    description="Comparing your profile against top competitors to identify improvement opportunities."
                    detail=detail(|r| format!("{} missing keywords identified", r.gap_analysis.missing_keywords.len()))
                    running=running
                />
                <AnalysisTask
                    title="D) AI Optimization"
                    description="Generating optimized content for headline, about section, experience bullets, and skill suggestions."
                    detail=detail(|r| format!("SEO score: {}/100", r.seo_score.total))
                    running=running
                />
            </div>
            <Show when=move || running.get()>
                <p class="mt-6 text-center text-gray-600">"This may take 30-60 seconds..."</p>
            </Show>
            <div class="flex justify-between pt-8">
                <Button variant=ButtonVariant::Secondary disabled=running on_click=back>
                    "Back"
                </Button>
                <Show
                    when=move || failure.with(Option::is_some)
                    fallback=move || view! {
                        <Button
                            disabled=Signal::derive(move || wizard.with(|w| w.report().is_none()))
                            on_click=move |_: ev::MouseEvent| { wizard.update(|w| { w.advance(); }); }
                        >
                            "View Results"
                        </Button>
                    }
                >
                    <Button on_click=retry.clone()>"Try Again"</Button>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn ContentBlock(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="border border-gray-200 rounded-lg p-6">
            <h3 class="text-lg font-semibold text-gray-900 mb-3">{title}</h3>
            {children()}
        </div>
    }
}

#[component]
fn ResultsStep(wizard: RwSignal<LinkedInWizard>) -> impl IntoView {
    let Some(report) = wizard.with_untracked(|w| w.report().cloned()) else {
        return view! { <p class="text-gray-600">"No analysis results yet."</p> }.into_view();
    };
    let score = report.seo_score;
    let content = report.optimized_content;
    let gaps = report.gap_analysis;

    view! {
        <div class="space-y-6">
            <div>
                <h2 class="text-2xl font-bold text-gray-900 mb-4">"Your Optimized LinkedIn Profile"</h2>
                <p class="text-gray-600">
                    "Here's your AI-optimized profile content based on competitor analysis and SEO best practices."
                </p>
            </div>
            <div class="bg-gradient-to-r from-blue-600 to-purple-600 rounded-lg p-8 text-white text-center">
                <h3 class="text-xl mb-2">"Your LinkedIn SEO Score"</h3>
                <div class="text-7xl font-bold mb-2">{score.total} "/100"</div>
                <p class="text-blue-100">{score.verdict()}</p>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mt-6 text-sm">
                    <div>"Keywords: " {score.breakdown.keywords}</div>
                    <div>"Structure: " {score.breakdown.structure}</div>
                    <div>"Completeness: " {score.breakdown.completeness}</div>
                    <div>"Gaps: " {score.breakdown.gaps}</div>
                </div>
            </div>
            <ContentBlock title="📝 Optimized Headline">
                <p class="text-gray-900">{content.headline}</p>
            </ContentBlock>
            <ContentBlock title="✍️ Optimized About Section">
                <p class="text-gray-900 whitespace-pre-line">{content.about}</p>
            </ContentBlock>
            <ContentBlock title="💼 Optimized Experience Bullets">
                <ul class="space-y-2 list-disc list-inside text-gray-900">
                    {content.experience_bullets.into_iter().map(|b| view! { <li>{b}</li> }).collect_view()}
                </ul>
            </ContentBlock>
            <ContentBlock title="🎯 Suggested Skills to Add">
                <div class="flex flex-wrap gap-2">
                    {content
                        .suggested_skills
                        .into_iter()
                        .map(|skill| view! { <span class="px-3 py-1 bg-blue-100 text-blue-800 rounded-full text-sm">{skill}</span> })
                        .collect_view()}
                </div>
            </ContentBlock>
            <div class="bg-yellow-50 border border-yellow-200 rounded-lg p-6 space-y-2 text-sm text-gray-700">
                <h3 class="text-lg font-semibold text-gray-900 mb-3">"⚠️ Key Gaps Identified"</h3>
                <p><strong>"Missing Keywords: "</strong>{gaps.missing_keywords.join(", ")}</p>
                <p><strong>"Comparison: "</strong>{gaps.keyword_usage_comparison}</p>
                <p><strong>"Profile Completeness: "</strong>{gaps.profile_completeness} "% (aim for 90%+)"</p>
            </div>
            <div class="flex justify-between pt-4">
                <Button variant=ButtonVariant::Secondary on_click=move |_: ev::MouseEvent| { wizard.update(|w| { w.retreat(); }); }>
                    "Back"
                </Button>
                <Button on_click=move |_: ev::MouseEvent| { wizard.update(|w| { w.advance(); }); }>
                    "Continue to Growth Modules"
                </Button>
            </div>
        </div>
    }
    .into_view()
}

#[component]
fn ModuleCard(wizard: RwSignal<LinkedInWizard>, index: usize, module: ExtraModule) -> impl IntoView {
    let active = move || wizard.with(|w| w.activated_modules().is_some_and(|set| set.contains(&module)));
    let accent = module.accent();

    view! {
        <div class=format!("border-2 border-{}-200 rounded-lg p-6", accent)>
            <h3 class="text-xl font-semibold text-gray-900 mb-2">
                {format!("Module {}: {}", index + 1, module.title())}
            </h3>
            <p class="text-gray-600 mb-4">{module.description()}</p>
            <h4 class="font-semibold text-gray-900 mb-2">"Features:"</h4>
            <ul class="space-y-1 text-sm text-gray-700 mb-4">
                {module.features().iter().map(|f| view! { <li>"✓ " {*f}</li> }).collect_view()}
            </ul>
            <button
                type="button"
                class=format!("px-4 py-2 bg-{0}-600 text-white rounded-lg hover:bg-{0}-700 disabled:opacity-60", accent)
                disabled=active
                on:click=move |_| {
                    if let Some(Err(err)) = wizard.try_update(|w| w.activate_module(module)) {
                        log::warn!("activate ignored: {}", err);
                    }
                }
            >
                {move || if active() {
                    "Activated ✓".to_string()
                } else {
                    format!("Activate Module (${}/month)", module.monthly_price())
                }}
            </button>
        </div>
    }
}

#[component]
fn ModulesStep(wizard: RwSignal<LinkedInWizard>) -> impl IntoView {
    let navigate = use_navigate();
    let all_active = move || {
        wizard.with(|w| w.activated_modules().is_some_and(|set| set.len() == ExtraModule::ALL.len()))
    };

    let finish = move |_: ev::MouseEvent| {
        if let Some(route) = wizard.with_untracked(LinkedInWizard::exit_route) {
            navigate(route, Default::default());
            wizard.try_update(LinkedInWizard::complete);
        }
    };

    view! {
        <div class="space-y-6">
            <div>
                <h2 class="text-2xl font-bold text-gray-900 mb-4">"LinkedIn Growth Modules"</h2>
                <p class="text-gray-600">
                    "Boost your LinkedIn presence with these AI-powered modules for real ranking improvement."
                </p>
            </div>
            {ExtraModule::ALL
                .into_iter()
                .enumerate()
                .map(|(index, module)| view! { <ModuleCard wizard=wizard index=index module=module/> })
                .collect_view()}
            <div class="bg-gradient-to-r from-blue-600 to-purple-600 rounded-lg p-8 text-white text-center">
                <h3 class="text-2xl font-bold mb-2">"All Modules Bundle"</h3>
                <p class="text-blue-100 mb-4">"Get all 3 modules at a discounted price"</p>
                <p class="text-4xl font-bold mb-2">{format!("${}/month", BUNDLE_PRICE)}</p>
                <p class="text-sm text-blue-100 mb-4">{format!("Save ${}/month", bundle_savings())}</p>
                <button
                    type="button"
                    class="px-8 py-3 bg-white text-blue-600 rounded-lg hover:bg-gray-100 font-semibold disabled:opacity-60"
                    disabled=all_active
                    on:click=move |_| {
                        if let Some(Err(err)) = wizard.try_update(LinkedInWizard::activate_all_modules) {
                            log::warn!("bundle ignored: {}", err);
                        }
                    }
                >
                    {move || if all_active() { "All Modules Active ✓" } else { "Activate All Modules" }}
                </button>
            </div>
            <div class="flex justify-between pt-4">
                <Button variant=ButtonVariant::Secondary on_click=move |_: ev::MouseEvent| { wizard.update(|w| { w.retreat(); }); }>
                    "Back"
                </Button>
                <Button variant=ButtonVariant::Success on_click=finish>
                    "Finish & Go to Dashboard"
                </Button>
            </div>
        </div>
    }
}
